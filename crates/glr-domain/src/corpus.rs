//! Report corpus - the text every extractor reads

use std::fmt;

/// The concatenated plain text of every supplied report page
///
/// Pages are appended in input order, each followed by a newline. A page
/// that yields no text contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportCorpus(String);

impl ReportCorpus {
    /// Build a corpus from page texts in reading order
    ///
    /// # Examples
    ///
    /// ```
    /// use glr_domain::ReportCorpus;
    ///
    /// let corpus = ReportCorpus::from_pages([
    ///     Some("Insured: Jane Doe".to_string()),
    ///     None,
    ///     Some(String::new()),
    ///     Some("Date of Loss: 3/4/2024".to_string()),
    /// ]);
    /// assert_eq!(corpus.as_str(), "Insured: Jane Doe\nDate of Loss: 3/4/2024\n");
    /// ```
    pub fn from_pages<I>(pages: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let mut text = String::new();
        for page in pages.into_iter().flatten() {
            if page.is_empty() {
                continue;
            }
            text.push_str(&page);
            text.push('\n');
        }
        Self(text)
    }

    /// Concatenate several corpora, preserving order
    pub fn concat<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = ReportCorpus>,
    {
        Self(parts.into_iter().map(|c| c.0).collect())
    }

    /// The corpus text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether no page produced text
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for ReportCorpus {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for ReportCorpus {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl fmt::Display for ReportCorpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_are_newline_terminated() {
        let corpus = ReportCorpus::from_pages([Some("a".to_string()), Some("b".to_string())]);
        assert_eq!(corpus.as_str(), "a\nb\n");
    }

    #[test]
    fn test_textless_pages_contribute_nothing() {
        let corpus = ReportCorpus::from_pages([None, Some(String::new())]);
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_concat_keeps_document_order() {
        let first = ReportCorpus::from_pages([Some("one".to_string())]);
        let second = ReportCorpus::from_pages([Some("two".to_string())]);
        assert_eq!(ReportCorpus::concat([first, second]).as_str(), "one\ntwo\n");
    }
}
