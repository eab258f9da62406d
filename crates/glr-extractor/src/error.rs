//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
///
/// None of these escape the pipeline: rule errors become per-rule failures
/// and AI errors become [`glr_domain::ExtractionOutcome::Failure`].
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Response was not a JSON object of field values
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(String),

    /// A pattern rule could not be compiled or applied
    #[error("Invalid rule '{rule}': {reason}")]
    InvalidRule {
        /// Rule name
        rule: String,
        /// What is wrong with it
        reason: String,
    },
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::Json(e.to_string())
    }
}
