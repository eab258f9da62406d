//! Configuration for the Extractor

use crate::rules::RuleSpec;
use serde::{Deserialize, Serialize};

/// Configuration for both extractors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum corpus length sent to the model (characters)
    ///
    /// Longer corpora are truncated in the prompt only; pattern rules always
    /// see the full text.
    pub max_corpus_chars: usize,

    /// Extra or replacement pattern rules
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<RuleSpec>,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_corpus_chars == 0 {
            return Err("max_corpus_chars must be greater than 0".to_string());
        }
        for rule in &self.rules {
            if rule.name.trim().is_empty() {
                return Err("rule name must not be empty".to_string());
            }
            if rule.captures.is_empty() {
                return Err(format!("rule '{}' has no captures", rule.name));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_corpus_chars: 500_000,
            rules: Vec::new(),
        }
    }
}
