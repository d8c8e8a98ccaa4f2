use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionMessageToolCall, ChatCompletionRequestAssistantMessageArgs,
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestToolMessageArgs, ChatCompletionRequestUserMessageArgs,
        ChatCompletionResponseMessage, ChatCompletionTool, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::info;

use crate::config::LlmConfig;
use crate::error::LlmError;

/// One chat-completions round trip. The seam the agent loop is written against.
#[async_trait]
pub trait ChatModel: Send + Sync {
    fn model(&self) -> &str;

    async fn complete(
        &self,
        messages: &[ChatCompletionRequestMessage],
        tools: &[ChatCompletionTool],
    ) -> Result<ChatCompletionResponseMessage, LlmError>;
}

/// OpenAI-compatible client. Points at Ollama's `/v1` by default.
#[derive(Clone)]
pub struct LLMClient {
    pub client: Client<OpenAIConfig>,
    pub model: String,
}

impl LLMClient {
    pub fn new(api_key: String, base_url: Option<String>, model: String) -> Self {
        let mut config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(url) = base_url {
            config = config.with_api_base(url);
        }
        let client = Client::with_config(config);
        Self { client, model }
    }

    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(
            config.effective_api_key(),
            Some(config.base_url.clone()),
            config.model.clone(),
        )
    }
}

#[async_trait]
impl ChatModel for LLMClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(
        &self,
        messages: &[ChatCompletionRequestMessage],
        tools: &[ChatCompletionTool],
    ) -> Result<ChatCompletionResponseMessage, LlmError> {
        info!(
            "🤖 Sending request to LLM (Model: {}, messages: {}, tools: {})...",
            self.model,
            messages.len(),
            tools.len()
        );

        let mut builder = CreateChatCompletionRequestArgs::default();
        builder.model(&self.model).messages(messages.to_vec());
        if !tools.is_empty() {
            builder.tools(tools.to_vec());
        }
        let request = builder.build()?;

        let response = self.client.chat().create(request).await?;

        info!("🤖 LLM Response received.");

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or(LlmError::EmptyResponse)
    }
}

pub fn system_message(content: &str) -> Result<ChatCompletionRequestMessage, LlmError> {
    Ok(ChatCompletionRequestSystemMessageArgs::default()
        .content(content)
        .build()?
        .into())
}

pub fn user_message(content: &str) -> Result<ChatCompletionRequestMessage, LlmError> {
    Ok(ChatCompletionRequestUserMessageArgs::default()
        .content(content)
        .build()?
        .into())
}

/// Echo of an assistant turn that requested tools, required before the tool results.
pub fn assistant_tool_calls_message(
    content: Option<String>,
    tool_calls: Vec<ChatCompletionMessageToolCall>,
) -> Result<ChatCompletionRequestMessage, LlmError> {
    let mut builder = ChatCompletionRequestAssistantMessageArgs::default();
    builder.tool_calls(tool_calls);
    if let Some(content) = content.filter(|c| !c.is_empty()) {
        builder.content(content);
    }
    Ok(builder.build()?.into())
}

pub fn tool_message(
    tool_call_id: &str,
    content: String,
) -> Result<ChatCompletionRequestMessage, LlmError> {
    Ok(ChatCompletionRequestToolMessageArgs::default()
        .content(content)
        .tool_call_id(tool_call_id)
        .build()?
        .into())
}
