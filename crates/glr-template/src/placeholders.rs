//! Placeholder discovery

use crate::document::TemplateDocument;
use glr_domain::PlaceholderSet;
use regex::Regex;
use std::sync::LazyLock;

static BRACKET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]").expect("valid regex"));

static DOUBLE_BRACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{(.*?)\}\}").expect("valid regex"));

/// Collect the raw field names referenced by a template
///
/// Every paragraph and table-cell paragraph is scanned; a placeholder never
/// spans two paragraphs.
pub fn discover_placeholders(document: &TemplateDocument) -> PlaceholderSet {
    let placeholders = placeholders_in_text(&document.text());

    tracing::info!(
        "Discovered {} placeholders in {} text containers",
        placeholders.len(),
        document.containers().len()
    );

    placeholders
}

/// Collect raw field names from plain text
///
/// `[NAME]` and `{{NAME}}` are matched independently, each non-greedily and
/// within one line. Captured names are trimmed but otherwise kept as written.
pub fn placeholders_in_text(text: &str) -> PlaceholderSet {
    BRACKET
        .captures_iter(text)
        .chain(DOUBLE_BRACE.captures_iter(text))
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str().trim())
        .collect()
}
