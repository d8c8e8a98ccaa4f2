//! First stage of answer handling: clean up the model's free-form text and
//! pull out a structured `{"answer": ...}` object when one is present.

use serde_json::{Map, Value};

const FENCE: &str = "```";

/// Result of normalizing raw agent output
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// A JSON object containing an `answer` key, returned as parsed
    Structured(Map<String, Value>),
    /// The cleaned text, when no answer object could be recovered
    Text(String),
}

impl Normalized {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Normalized::Text(text) => Some(text.as_str()),
            Normalized::Structured(_) => None,
        }
    }
}

/// Strip fences, backticks and line breaks from `raw` and try to read it as
/// an answer object. Never fails: anything unparseable comes back as text.
pub fn normalize(raw: &str) -> Normalized {
    let cleaned = clean(raw);

    match serde_json::from_str::<Value>(&cleaned) {
        Ok(Value::Object(map)) if map.contains_key("answer") => Normalized::Structured(map),
        _ => Normalized::Text(cleaned),
    }
}

/// Text cleanup applied before any parsing attempt.
pub fn clean(raw: &str) -> String {
    let mut cleaned = raw.trim();

    if cleaned.starts_with(FENCE) && cleaned.ends_with(FENCE) {
        cleaned = cleaned.trim_matches('`');
    }
    let cleaned = cleaned.trim();

    // Escaped "\n" first so a literal backslash-n never survives as "\"
    cleaned
        .replace("\\n", "")
        .replace(['\n', '\r'], "")
        .replace('`', "")
}
