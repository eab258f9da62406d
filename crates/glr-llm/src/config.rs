//! Configuration for the model provider

use serde::{Deserialize, Serialize};

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default environment variable holding the API key
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default timeout for a model request (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Which completion service to call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Google Gemini
    #[default]
    Gemini,
    /// Local Ollama instance
    Ollama,
    /// No AI extraction; deterministic results only
    Disabled,
}

/// Model provider settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LlmConfig {
    /// Completion service
    pub provider: ProviderKind,

    /// Model identifier sent with every request
    pub model: String,

    /// Override for the provider's API base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// API key; takes precedence over `api_key_env`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Environment variable to read the API key from
    pub api_key_env: String,

    /// Maximum time for one model request (seconds)
    pub request_timeout_secs: u64,
}

impl LlmConfig {
    /// Resolve the API key from the config or the environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok().filter(|key| !key.is_empty()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        if self.provider != ProviderKind::Disabled && self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Gemini,
            model: DEFAULT_MODEL.to_string(),
            endpoint: None,
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LlmConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.provider, ProviderKind::Gemini);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = LlmConfig {
            request_timeout_secs: 0,
            ..LlmConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_explicit_api_key_wins() {
        let config = LlmConfig {
            api_key: Some("from-config".to_string()),
            api_key_env: "GLR_TEST_UNSET_KEY_VARIABLE".to_string(),
            ..LlmConfig::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("from-config"));
    }

    #[test]
    fn test_missing_api_key() {
        let config = LlmConfig {
            api_key_env: "GLR_TEST_UNSET_KEY_VARIABLE".to_string(),
            ..LlmConfig::default()
        };
        assert!(config.resolve_api_key().is_none());
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            provider = "ollama"
            model = "llama3"
            endpoint = "http://localhost:11434"
        "#;

        let config: LlmConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.provider, ProviderKind::Ollama);
        assert_eq!(config.model, "llama3");
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:11434"));
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
