//! Stock Agent API - natural-language stock price queries over HTTP
//!
//! This library forwards a question to an LLM agent equipped with a stock
//! price tool and turns the model's free-form reply into a strict JSON answer.

pub mod agents;
pub mod answer;
pub mod api;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod llm;
pub mod tools;

// Re-export commonly used types
pub use agents::{Agent, AgentReply, StockAgent};
pub use answer::{normalize, resolve, Normalized, Resolution};
pub use api::{router, AppState};
pub use config::AppConfig;
pub use error::ApiError;
