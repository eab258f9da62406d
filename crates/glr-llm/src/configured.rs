//! Provider selected at runtime from configuration

use crate::config::{LlmConfig, ProviderKind};
use crate::{GeminiProvider, LlmError, OllamaProvider};
use glr_domain::traits::LlmProvider as LlmProviderTrait;
use tracing::info;

/// One of the concrete providers, or none
pub enum ConfiguredProvider {
    /// Google Gemini
    Gemini(GeminiProvider),
    /// Local Ollama
    Ollama(OllamaProvider),
    /// AI extraction switched off; every call fails with [`LlmError::Disabled`]
    Disabled,
}

impl ConfiguredProvider {
    /// Build the provider described by `config`
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Config`] when Gemini is selected but no API key
    /// is configured or present in the environment.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        config.validate().map_err(LlmError::Config)?;

        let provider = match config.provider {
            ProviderKind::Gemini => {
                let api_key = config.resolve_api_key().ok_or_else(|| {
                    LlmError::Config(format!(
                        "No Gemini API key: set `api_key` or the {} environment variable",
                        config.api_key_env
                    ))
                })?;
                let endpoint = config
                    .endpoint
                    .clone()
                    .unwrap_or_else(|| crate::gemini::DEFAULT_ENDPOINT.to_string());
                ConfiguredProvider::Gemini(GeminiProvider::with_endpoint(
                    endpoint,
                    api_key,
                    config.model.clone(),
                    config.request_timeout_secs,
                )?)
            }
            ProviderKind::Ollama => {
                let endpoint = config
                    .endpoint
                    .clone()
                    .unwrap_or_else(|| crate::ollama::DEFAULT_ENDPOINT.to_string());
                ConfiguredProvider::Ollama(OllamaProvider::new(
                    endpoint,
                    config.model.clone(),
                    config.request_timeout_secs,
                )?)
            }
            ProviderKind::Disabled => ConfiguredProvider::Disabled,
        };

        info!("LLM provider: {:?} ({})", config.provider, provider.model_name());
        Ok(provider)
    }
}

impl LlmProviderTrait for ConfiguredProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        match self {
            ConfiguredProvider::Gemini(p) => LlmProviderTrait::generate(p, prompt),
            ConfiguredProvider::Ollama(p) => LlmProviderTrait::generate(p, prompt),
            ConfiguredProvider::Disabled => Err(LlmError::Disabled),
        }
    }

    fn model_name(&self) -> &str {
        match self {
            ConfiguredProvider::Gemini(p) => p.model_name(),
            ConfiguredProvider::Ollama(p) => p.model_name(),
            ConfiguredProvider::Disabled => "disabled",
        }
    }
}
