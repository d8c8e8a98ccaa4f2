//! Second stage of answer handling: decide whether a normalized answer is a
//! success body or an error the agent declared.

use axum::http::StatusCode;
use serde_json::{json, Map, Value};

use super::normalizer::Normalized;
use crate::constants::agent_errors::{DEFAULT_MESSAGE, DEFAULT_STATUS};
use crate::error::ApiError;

/// The `error` value an agent reply carried.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorDeclaration {
    /// `{"error": "message"}` or any other non-object value
    Plain(String),
    /// `{"error": {"code": 404, "message": "..."}}`
    Coded { code: Option<u16>, message: String },
}

impl ErrorDeclaration {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(fields) => {
                let code = fields
                    .get("code")
                    .and_then(Value::as_u64)
                    .and_then(|c| u16::try_from(c).ok());
                let message = match fields.get("message") {
                    None => DEFAULT_MESSAGE.to_string(),
                    Some(Value::String(s)) => s.clone(),
                    Some(other) => other.to_string(),
                };
                ErrorDeclaration::Coded { code, message }
            }
            Value::String(s) => ErrorDeclaration::Plain(s.clone()),
            other => ErrorDeclaration::Plain(other.to_string()),
        }
    }

    /// Declared code if it is an HTTP error status (4xx/5xx), else 500.
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorDeclaration::Coded {
                code: Some(code), ..
            } if (400..=599).contains(code) => {
                StatusCode::from_u16(*code).unwrap_or(DEFAULT_STATUS)
            }
            _ => DEFAULT_STATUS,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ErrorDeclaration::Plain(message) => message.as_str(),
            ErrorDeclaration::Coded { message, .. } => message.as_str(),
        }
    }
}

impl From<ErrorDeclaration> for ApiError {
    fn from(declaration: ErrorDeclaration) -> Self {
        ApiError::new(declaration.status(), declaration.message())
    }
}

/// What the handler should send back
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// 200 with this body
    Answer(Value),
    /// The agent declared an error
    Failure(ErrorDeclaration),
}

impl Resolution {
    pub fn into_result(self) -> Result<Value, ApiError> {
        match self {
            Resolution::Answer(body) => Ok(body),
            Resolution::Failure(declaration) => Err(declaration.into()),
        }
    }
}

/// Turn normalizer output into a response decision. `error` wins over
/// `answer`; text is re-parsed once and otherwise wrapped as `{"answer": text}`.
pub fn resolve(normalized: Normalized) -> Resolution {
    match normalized {
        Normalized::Structured(map) => resolve_object(map),
        Normalized::Text(text) => match reparse(&text) {
            Some(map) if map.contains_key("error") || map.contains_key("answer") => {
                resolve_object(map)
            }
            _ => Resolution::Answer(json!({ "answer": text })),
        },
    }
}

/// Parse `text` again, keeping it only if it is a JSON object.
pub fn reparse(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

fn resolve_object(map: Map<String, Value>) -> Resolution {
    match map.get("error") {
        Some(error) => Resolution::Failure(ErrorDeclaration::from_value(error)),
        None => Resolution::Answer(Value::Object(map)),
    }
}
