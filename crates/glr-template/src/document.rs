//! In-memory template documents

use crate::error::TemplateError;
use crate::package::read_document_part;
use crate::xml::read_containers;
use std::path::Path;

/// Where a text container sits in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerLocation {
    /// A paragraph in the document body
    Body,
    /// A paragraph inside a table cell
    TableCell,
}

/// One paragraph's aggregated text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextContainer {
    /// Where the paragraph sits
    pub location: ContainerLocation,
    /// Text of all its runs, concatenated
    pub text: String,
}

/// A parsed DOCX template
///
/// Keeps the original package bytes so rendering can copy every part other
/// than the main document unchanged.
#[derive(Debug, Clone)]
pub struct TemplateDocument {
    package: Vec<u8>,
    document_xml: String,
    containers: Vec<TextContainer>,
}

impl TemplateDocument {
    /// Parse a template from DOCX bytes
    pub fn from_bytes(package: Vec<u8>) -> Result<Self, TemplateError> {
        let document_xml = read_document_part(&package)?;
        let containers = read_containers(&document_xml)?;

        tracing::debug!("Template parsed: {} text containers", containers.len());

        Ok(Self {
            package,
            document_xml,
            containers,
        })
    }

    /// Read and parse a template file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        Self::from_bytes(std::fs::read(path)?)
    }

    /// Paragraphs in document order, body and table cells interleaved
    pub fn containers(&self) -> &[TextContainer] {
        &self.containers
    }

    /// Paragraphs of one kind only
    pub fn containers_at(&self, location: ContainerLocation) -> impl Iterator<Item = &TextContainer> {
        self.containers.iter().filter(move |c| c.location == location)
    }

    /// Whole-document text, one container per line
    pub fn text(&self) -> String {
        let mut text = String::new();
        for container in &self.containers {
            text.push_str(&container.text);
            text.push('\n');
        }
        text
    }

    pub(crate) fn package(&self) -> &[u8] {
        &self.package
    }

    pub(crate) fn document_xml(&self) -> &str {
        &self.document_xml
    }
}
