//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the extraction logic and the
//! infrastructure it talks to. Implementations live in other crates.

use crate::corpus::ReportCorpus;

/// Trait for language-model completion services
///
/// Implemented by the infrastructure layer (glr-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate a completion for a prompt
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Name of the model serving requests, for logs and reports
    fn model_name(&self) -> &str;
}

/// Trait for turning report documents into page text
///
/// Implemented by the infrastructure layer (glr-reports)
pub trait ReportTextProvider {
    /// Handle to one source document
    type Document;

    /// Error type for unreadable documents
    type Error;

    /// Text of each page in order; `None` for a page that yields no text
    fn page_texts(&self, document: &Self::Document) -> Result<Vec<Option<String>>, Self::Error>;

    /// Concatenate every page of every document into one corpus
    fn corpus(&self, documents: &[Self::Document]) -> Result<ReportCorpus, Self::Error> {
        let mut pages = Vec::new();
        for document in documents {
            pages.extend(self.page_texts(document)?);
        }
        Ok(ReportCorpus::from_pages(pages))
    }
}
