//! Pipeline errors

use crate::config::ConfigError;
use glr_template::TemplateError;
use thiserror::Error;

/// Errors that stop a pipeline run
///
/// Missing or unreadable inputs are reported before extraction starts. An
/// AI failure is never an error.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// No template, or no reports, were supplied
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// The template is not a readable DOCX
    #[error("Unreadable template: {0}")]
    Template(#[from] TemplateError),

    /// A report is not a readable PDF
    #[error("Unreadable report: {0}")]
    Report(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl PipelineError {
    /// Wrap a report provider error
    pub fn report(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        PipelineError::Report(Box::new(e))
    }
}
