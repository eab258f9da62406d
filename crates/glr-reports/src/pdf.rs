//! PDF page text via `pdf-extract`

use crate::{ReportDocument, ReportError};
use glr_domain::traits::ReportTextProvider;

/// Page separator emitted by `pdf-extract`
const PAGE_BREAK: char = '\x0c';

/// Reads page text out of PDF reports
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextProvider;

impl PdfTextProvider {
    /// Create a provider
    pub fn new() -> Self {
        Self
    }
}

impl ReportTextProvider for PdfTextProvider {
    type Document = ReportDocument;
    type Error = ReportError;

    fn page_texts(&self, document: &ReportDocument) -> Result<Vec<Option<String>>, ReportError> {
        let text = guarded(&document.name, || pdf_extract::extract_text_from_mem(&document.bytes))?;

        let pages = split_pages(&text);
        let with_text = pages.iter().filter(|p| p.is_some()).count();

        if with_text == 0 {
            tracing::warn!("{} yielded no text (scanned images?)", document.name);
        } else {
            tracing::debug!(
                "{}: {} pages, {} with text, {} chars",
                document.name,
                pages.len(),
                with_text,
                text.len()
            );
        }

        Ok(pages)
    }
}

/// Run a parser call, turning both its error and any panic into `ReportError::Pdf`
///
/// `pdf-extract` panics on some malformed files instead of returning an error.
fn guarded<T, E, F>(name: &str, parse: F) -> Result<T, ReportError>
where
    E: std::fmt::Display,
    F: FnOnce() -> Result<T, E>,
{
    let pdf_error = |reason: String| ReportError::Pdf {
        name: name.to_string(),
        reason,
    };

    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(parse)) {
        Ok(result) => result.map_err(|e| pdf_error(e.to_string())),
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::warn!("PDF parser panicked on {}: {}", name, message);
            Err(pdf_error(format!("parser panicked: {message}")))
        }
    }
}

/// Split extracted text into pages
///
/// A page that is empty or whitespace-only yields `None`. A trailing
/// separator does not produce an extra page.
fn split_pages(text: &str) -> Vec<Option<String>> {
    let body = text.strip_suffix(PAGE_BREAK).unwrap_or(text);
    if body.is_empty() {
        return Vec::new();
    }

    body.split(PAGE_BREAK)
        .map(|page| (!page.trim().is_empty()).then(|| page.to_string()))
        .collect()
}
