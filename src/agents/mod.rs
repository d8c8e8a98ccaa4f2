pub mod stock;

use async_trait::async_trait;

use crate::error::AgentError;

pub use stock::StockAgent;

/// Final text of an agent run. `None` when the model produced no content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentReply {
    pub content: Option<String>,
}

impl AgentReply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    pub fn into_content(self) -> String {
        self.content.unwrap_or_default()
    }
}

/// Anything that can answer a question with free-form text.
#[async_trait]
pub trait Agent: Send + Sync {
    fn name(&self) -> &str;

    async fn run(&self, question: &str) -> Result<AgentReply, AgentError>;
}
