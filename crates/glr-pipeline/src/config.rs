//! Pipeline configuration
//!
//! One TOML document with `[llm]`, `[extractor]` and `[output]` tables.
//! Every field has a default, so an empty file is a valid configuration.

use glr_extractor::ExtractorConfig;
use glr_llm::LlmConfig;
use glr_template::OUTPUT_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default directory rendered reports are written to
pub const DEFAULT_OUTPUT_DIR: &str = "glr_output";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("Failed to serialize config TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Where rendered reports go
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory, created on demand
    pub directory: PathBuf,
    /// File name of the rendered report
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_name: OUTPUT_FILE_NAME.to_string(),
        }
    }
}

/// Complete pipeline configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Model provider
    pub llm: LlmConfig,
    /// Extraction settings
    pub extractor: ExtractorConfig,
    /// Output location
    pub output: OutputConfig,
}

impl PipelineConfig {
    /// Load and validate configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: PipelineConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.llm
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("[llm] {e}")))?;
        self.extractor
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("[extractor] {e}")))?;

        let file_name = self.output.file_name.trim();
        if file_name.is_empty() {
            return Err(ConfigError::Invalid("[output] file_name must not be empty".to_string()));
        }
        if file_name.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(
                "[output] file_name must not contain path separators".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glr_llm::ProviderKind;

    #[test]
    fn test_empty_toml_is_default() {
        let config = PipelineConfig::from_toml("").unwrap();
        assert_eq!(config, PipelineConfig::default());
        assert_eq!(config.output.directory, PathBuf::from("glr_output"));
        assert_eq!(config.output.file_name, "Final_GLR_Report.docx");
        assert_eq!(config.llm.request_timeout_secs, 120);
        assert_eq!(config.extractor.max_corpus_chars, 500_000);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            [llm]
            provider = "ollama"
            model = "llama3.2"
            endpoint = "http://localhost:11434"
            request_timeout_secs = 30

            [extractor]
            max_corpus_chars = 20000

            [[extractor.rules]]
            name = "claim-number"
            pattern = 'Claim\s*#?:\s*(\S+)'
            captures = [{ field = "CLAIM_NUMBER", group = 1 }]

            [output]
            directory = "/tmp/glr"
            file_name = "claim.docx"
        "#;

        let config = PipelineConfig::from_toml(toml).unwrap();
        assert_eq!(config.llm.provider, ProviderKind::Ollama);
        assert_eq!(config.llm.model, "llama3.2");
        assert_eq!(config.llm.request_timeout_secs, 30);
        assert_eq!(config.extractor.max_corpus_chars, 20000);
        assert_eq!(config.extractor.rules.len(), 1);
        assert_eq!(config.extractor.rules[0].captures[0].field, "CLAIM_NUMBER");
        assert_eq!(config.output.directory, PathBuf::from("/tmp/glr"));
        assert_eq!(config.output.file_name, "claim.docx");
    }

    #[test]
    fn test_invalid_values_rejected() {
        for toml in [
            "[llm]\nrequest_timeout_secs = 0",
            "[extractor]\nmax_corpus_chars = 0",
            "[output]\nfile_name = \"\"",
            "[output]\nfile_name = \"../escape.docx\"",
        ] {
            let result = PipelineConfig::from_toml(toml);
            assert!(matches!(result, Err(ConfigError::Invalid(_))), "accepted: {toml}");
        }
    }

    #[test]
    fn test_unknown_provider_is_parse_error() {
        let result = PipelineConfig::from_toml("[llm]\nprovider = \"openai\"");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PipelineConfig::default();
        let parsed = PipelineConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\ndirectory = \"reports\"\n").unwrap();

        let config = PipelineConfig::from_file(&path).unwrap();
        assert_eq!(config.output.directory, PathBuf::from("reports"));
        assert!(matches!(
            PipelineConfig::from_file(dir.path().join("missing.toml")),
            Err(ConfigError::FileRead(_))
        ));
    }
}
