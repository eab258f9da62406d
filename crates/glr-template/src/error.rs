//! Error types for template handling

use thiserror::Error;

/// Errors reading or writing a template package
#[derive(Error, Debug)]
pub enum TemplateError {
    /// The bytes are not a ZIP package
    #[error("Failed to read DOCX as ZIP: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The package has no main document part
    #[error("Invalid DOCX: missing word/document.xml")]
    MissingDocumentPart,

    /// The document part is not well-formed XML
    #[error("XML error: {0}")]
    Xml(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
