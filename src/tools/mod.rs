//! Tool trait and registry
//!
//! Tools are what the model may call mid-conversation. Their results (or
//! their failures) go back to the model as tool messages.

pub mod stock_price;

use async_openai::{
    error::OpenAIError,
    types::{ChatCompletionTool, ChatCompletionToolArgs, ChatCompletionToolType, FunctionObjectArgs},
};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::ToolError;

pub use stock_price::StockPriceTool;

#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    /// JSON Schema of the arguments object
    fn parameters(&self) -> Value;
    async fn execute(&self, arguments: &Value) -> Result<String, ToolError>;
}

#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Function definitions for the chat-completions request, sorted by name.
    pub fn definitions(&self) -> Result<Vec<ChatCompletionTool>, OpenAIError> {
        self.list()
            .into_iter()
            .filter_map(|name| self.tools.get(name))
            .map(|tool| {
                ChatCompletionToolArgs::default()
                    .r#type(ChatCompletionToolType::Function)
                    .function(
                        FunctionObjectArgs::default()
                            .name(tool.name())
                            .description(tool.description())
                            .parameters(tool.parameters())
                            .build()?,
                    )
                    .build()
            })
            .collect()
    }

    /// Run a tool by name with the model's raw argument string.
    pub async fn call(&self, name: &str, raw_arguments: &str) -> Result<String, ToolError> {
        let tool = self.get(name).ok_or_else(|| ToolError::UnknownTool {
            name: name.to_string(),
        })?;

        let arguments: Value = if raw_arguments.trim().is_empty() {
            json!({})
        } else {
            serde_json::from_str(raw_arguments).map_err(|e| ToolError::InvalidArguments {
                tool: name.to_string(),
                reason: e.to_string(),
            })?
        };

        tool.execute(&arguments).await
    }

    /// Like [`ToolRegistry::call`], but failures become an `{"error": ...}`
    /// payload for the model instead of an `Err`.
    pub async fn dispatch(&self, name: &str, raw_arguments: &str) -> String {
        info!("🔧 [TOOL] {} called with {}", name, raw_arguments);
        match self.call(name, raw_arguments).await {
            Ok(output) => {
                info!("🔧 [TOOL] {} -> {}", name, output);
                output
            }
            Err(e) => {
                warn!("⚠️ [TOOL] {} failed: {}", name, e);
                json!({ "error": e.to_string() }).to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &'static str {
            "echo"
        }

        fn description(&self) -> &'static str {
            "Echo the text argument"
        }

        fn parameters(&self) -> Value {
            json!({
                "type": "object",
                "properties": {"text": {"type": "string"}},
                "required": ["text"]
            })
        }

        async fn execute(&self, arguments: &Value) -> Result<String, ToolError> {
            arguments
                .get("text")
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| ToolError::InvalidArguments {
                    tool: "echo".to_string(),
                    reason: "missing text".to_string(),
                })
        }
    }

    struct NoopTool;

    #[async_trait]
    impl Tool for NoopTool {
        fn name(&self) -> &'static str {
            "noop"
        }

        fn description(&self) -> &'static str {
            "Does nothing"
        }

        fn parameters(&self) -> Value {
            json!({"type": "object", "properties": {}})
        }

        async fn execute(&self, _arguments: &Value) -> Result<String, ToolError> {
            Ok("ok".to_string())
        }
    }

    fn registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(NoopTool));
        registry.register(Arc::new(EchoTool));
        registry
    }

    #[test]
    fn test_register_and_list_sorted() {
        let registry = registry();
        assert_eq!(registry.list(), vec!["echo", "noop"]);
        assert!(registry.get("echo").is_some());
        assert!(registry.get("missing").is_none());
        assert!(!registry.is_empty());
        assert!(ToolRegistry::new().is_empty());
    }

    #[test]
    fn test_definitions() {
        let defs = registry().definitions().unwrap();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].function.name, "echo");
        assert_eq!(defs[0].function.description.as_deref(), Some("Echo the text argument"));
        assert_eq!(defs[1].function.name, "noop");
        assert!(defs[0].function.parameters.is_some());
    }

    #[tokio::test]
    async fn test_call_success() {
        let out = registry().call("echo", r#"{"text":"hi"}"#).await.unwrap();
        assert_eq!(out, "hi");
    }

    #[tokio::test]
    async fn test_call_empty_arguments() {
        let out = registry().call("noop", "").await.unwrap();
        assert_eq!(out, "ok");
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let result = registry().call("nope", "{}").await;
        assert!(matches!(result, Err(ToolError::UnknownTool { name }) if name == "nope"));
    }

    #[tokio::test]
    async fn test_call_malformed_arguments() {
        let result = registry().call("echo", "{text:").await;
        assert!(matches!(result, Err(ToolError::InvalidArguments { .. })));
    }

    #[tokio::test]
    async fn test_dispatch_reports_errors_as_payload() {
        let out = registry().dispatch("echo", "{}").await;
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            parsed["error"].as_str(),
            Some("Invalid arguments for echo: missing text")
        );

        let out = registry().dispatch("echo", r#"{"text":"fine"}"#).await;
        assert_eq!(out, "fine");
    }
}
