//! GLR Reports
//!
//! Text extraction from the PDF inspection reports a GLR is written from.
//!
//! # Examples
//!
//! ```no_run
//! use glr_domain::traits::ReportTextProvider;
//! use glr_reports::{PdfTextProvider, ReportDocument};
//!
//! let reports = vec![
//!     ReportDocument::from_path("inspection.pdf").unwrap(),
//!     ReportDocument::from_path("estimate.pdf").unwrap(),
//! ];
//! let corpus = PdfTextProvider::new().corpus(&reports).unwrap();
//! println!("{} characters of report text", corpus.len());
//! ```

#![warn(missing_docs)]

pub mod pdf;

use std::path::Path;
use thiserror::Error;

pub use pdf::PdfTextProvider;

/// Errors that can occur reading a report
#[derive(Error, Debug)]
pub enum ReportError {
    /// The report file could not be read
    #[error("Failed to read report {name}: {source}")]
    Io {
        /// Report name
        name: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// The bytes are not a readable PDF
    #[error("Failed to extract text from {name}: {reason}")]
    Pdf {
        /// Report name
        name: String,
        /// Parser message
        reason: String,
    },
}

/// One source report held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    /// Display name, usually the file name
    pub name: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl ReportDocument {
    /// Wrap bytes already in memory
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a report from disk, named after its file name
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let bytes = std::fs::read(path).map_err(|source| ReportError::Io {
            name: name.clone(),
            source,
        })?;

        Ok(Self { name, bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_uses_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inspection.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let doc = ReportDocument::from_path(&path).unwrap();
        assert_eq!(doc.name, "inspection.pdf");
        assert_eq!(doc.bytes, b"%PDF-1.4");
    }

    #[test]
    fn test_from_path_missing() {
        let err = ReportDocument::from_path("/nonexistent/report.pdf").unwrap_err();
        assert!(matches!(err, ReportError::Io { ref name, .. } if name == "report.pdf"));
        assert!(err.to_string().contains("report.pdf"));
    }
}
