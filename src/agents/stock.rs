use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use super::{Agent, AgentReply};
use crate::error::AgentError;
use crate::llm::{
    assistant_tool_calls_message, system_message, tool_message, user_message, ChatModel,
};
use crate::tools::ToolRegistry;

pub const SYSTEM_PROMPT: &str = r#"You must always respond with a valid and clean JSON object containing a single key called "answer".

The value of "answer" must be an array of objects, each using the stock code as the key and the corresponding price as the value, for example:

{"answer":[{"AAPL":229.35},{"PETR4":129.98}]}.

Always use only the stock code (e.g., "AAPL", "PETR4") as the key, and only the price as a numerical value.

Do not include any additional text, markdown, explanations, or line break characters. Return only the compact JSON response on a single line.

If the answer cannot be provided in this format, respond with: {"error":"Invalid JSON format requested"}.
"#;

/// Stock price agent: one model, the price tool, and a strict output contract.
pub struct StockAgent {
    llm: Arc<dyn ChatModel>,
    tools: ToolRegistry,
    max_tool_rounds: usize,
}

impl StockAgent {
    pub fn new(llm: Arc<dyn ChatModel>, tools: ToolRegistry, max_tool_rounds: usize) -> Self {
        Self {
            llm,
            tools,
            max_tool_rounds,
        }
    }

    pub fn system_prompt(&self) -> &str {
        SYSTEM_PROMPT
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }
}

#[async_trait]
impl Agent for StockAgent {
    fn name(&self) -> &str {
        "Stock-Price-Agent"
    }

    async fn run(&self, question: &str) -> Result<AgentReply, AgentError> {
        let tools = self.tools.definitions().map_err(AgentError::Tools)?;
        let mut messages = vec![system_message(self.system_prompt())?, user_message(question)?];
        let mut tool_rounds = 0;

        loop {
            info!(
                "🤖 [AGENT] {} asking {} (tool round {}/{})",
                self.name(),
                self.llm.model(),
                tool_rounds,
                self.max_tool_rounds
            );
            let reply = self.llm.complete(&messages, &tools).await?;

            let calls = reply.tool_calls.unwrap_or_default();
            if calls.is_empty() {
                info!("🤖 [AGENT] Response from {}: {:?}", self.name(), reply.content);
                return Ok(AgentReply {
                    content: reply.content,
                });
            }

            if tool_rounds >= self.max_tool_rounds {
                return Err(AgentError::ToolRoundsExceeded(self.max_tool_rounds));
            }
            tool_rounds += 1;

            messages.push(assistant_tool_calls_message(reply.content, calls.clone())?);
            for call in &calls {
                let output = self
                    .tools
                    .dispatch(&call.function.name, &call.function.arguments)
                    .await;
                messages.push(tool_message(&call.id, output)?);
            }
        }
    }
}
