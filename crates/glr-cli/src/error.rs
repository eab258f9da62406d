//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pipeline configuration error
    #[error(transparent)]
    PipelineConfig(#[from] glr_pipeline::ConfigError),

    /// Pipeline run failed
    #[error(transparent)]
    Pipeline(#[from] glr_pipeline::PipelineError),

    /// Model provider could not be set up
    #[error("LLM provider error: {0}")]
    Llm(#[from] glr_llm::LlmError),

    /// Report could not be read
    #[error(transparent)]
    Report(#[from] glr_reports::ReportError),

    /// Template could not be read or written
    #[error(transparent)]
    Template(#[from] glr_template::TemplateError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
