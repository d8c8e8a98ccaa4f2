//! Custom error types for the query service
//!
//! Provides structured, typed errors instead of generic Box<dyn Error>

use async_openai::error::OpenAIError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors talking to the model backend
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("LLM request failed: {0}")]
    OpenAI(#[from] OpenAIError),

    #[error("LLM returned no choices")]
    EmptyResponse,
}

/// Tool execution errors. These are reported back to the model, never to the caller.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Invalid market data URL: {0}")]
    InvalidUrl(String),

    #[error("Could not fetch current price for {symbol}")]
    PriceUnavailable { symbol: String },
}

/// Agent run errors
#[derive(Error, Debug)]
pub enum AgentError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("Agent exceeded {0} tool rounds without a final answer")]
    ToolRoundsExceeded(usize),

    #[error("Failed to build tool definitions: {0}")]
    Tools(#[source] OpenAIError),
}

/// An HTTP failure as seen by the caller: a status and a `detail` message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("HTTP {status}: {detail}")]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }
}

impl From<AgentError> for ApiError {
    fn from(err: AgentError) -> Self {
        ApiError::internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}
