//! Application-wide constants and defaults
//!
//! Centralizes the values the config layer, the agent and the HTTP layer
//! fall back to when nothing else is specified.

/// Server defaults
pub mod server {
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8000;
}

/// LLM backend defaults (local Ollama through its OpenAI-compatible API)
pub mod llm {
    pub const DEFAULT_BASE_URL: &str = "http://localhost:11434/v1";
    pub const DEFAULT_MODEL: &str = "llama3.2";

    /// Ollama ignores the key but the OpenAI client always sends one
    pub const PLACEHOLDER_API_KEY: &str = "ollama";
}

/// Agent loop limits
pub mod agent {
    /// Model turns allowed to request tool calls before giving up
    pub const DEFAULT_MAX_TOOL_ROUNDS: usize = 5;
}

/// Market data defaults
pub mod market_data {
    pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    /// Yahoo rejects requests without a browser-like agent
    pub const USER_AGENT: &str =
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
}

/// Values used when the agent declares an error without details
pub mod agent_errors {
    use axum::http::StatusCode;

    pub const DEFAULT_STATUS: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;
    pub const DEFAULT_MESSAGE: &str = "Error";
}

/// Environment variable names
pub mod env {
    pub const CONFIG_PATH: &str = "CONFIG_PATH";
    pub const OLLAMA_HOST: &str = "OLLAMA_HOST";
    pub const LLM_API_KEY: &str = "LLM_API_KEY";
    pub const LLM_BASE_URL: &str = "LLM_BASE_URL";
    pub const LLM_MODEL: &str = "LLM_MODEL";
    pub const HOST: &str = "HOST";
    pub const PORT: &str = "PORT";
}
