use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;

use crate::constants;
use crate::error::ConfigError;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: constants::server::DEFAULT_HOST.to_string(),
            port: constants::server::DEFAULT_PORT,
        }
    }
}

#[derive(Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: constants::llm::DEFAULT_BASE_URL.to_string(),
            model: constants::llm::DEFAULT_MODEL.to_string(),
        }
    }
}

// Keeps the key out of startup logs
impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl LlmConfig {
    pub fn effective_api_key(&self) -> String {
        self.api_key
            .clone()
            .unwrap_or_else(|| constants::llm::PLACEHOLDER_API_KEY.to_string())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AgentConfig {
    pub max_tool_rounds: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_tool_rounds: constants::agent::DEFAULT_MAX_TOOL_ROUNDS,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct MarketDataConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            base_url: constants::market_data::DEFAULT_BASE_URL.to_string(),
            timeout_secs: constants::market_data::DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub agent: AgentConfig,
    pub market_data: MarketDataConfig,
}

impl AppConfig {
    /// Load `config.yaml` (or `$CONFIG_PATH`), then apply environment overrides.
    /// A missing file falls back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = std::env::var(constants::env::CONFIG_PATH)
            .unwrap_or_else(|_| "config.yaml".to_string());

        let mut config = match fs::read_to_string(&config_path) {
            Ok(content) => Self::from_yaml_str(&content)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Self::default(),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: config_path,
                    source,
                })
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        // Strip BOM if present
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(constants::env::LLM_API_KEY) {
            self.llm.api_key = Some(key);
        }
        if let Some(url) = lookup(constants::env::LLM_BASE_URL) {
            self.llm.base_url = url;
        }
        if let Some(model) = lookup(constants::env::LLM_MODEL) {
            self.llm.model = model;
        }
        if let Some(host) = lookup(constants::env::HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(constants::env::PORT) {
            self.server.port = port.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("PORT must be a port number, got {:?}", port))
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.llm.model.trim().is_empty() {
            return Err(ConfigError::Invalid("llm.model must not be empty".into()));
        }
        if self.agent.max_tool_rounds == 0 {
            return Err(ConfigError::Invalid(
                "agent.max_tool_rounds must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
