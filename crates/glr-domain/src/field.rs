//! Field names and their canonical lookup form

use std::fmt;

/// Normalize a field name to its canonical lookup key.
///
/// The name is uppercased and trimmed, then every run of characters outside
/// `[A-Za-z0-9]` collapses to a single `_`.
///
/// # Examples
///
/// ```
/// use glr_domain::normalize_field_name;
///
/// assert_eq!(normalize_field_name("date of loss"), "DATE_OF_LOSS");
/// assert_eq!(normalize_field_name("Insured - Name"), "INSURED_NAME");
/// assert_eq!(normalize_field_name("INSURED_NAME"), "INSURED_NAME");
/// ```
pub fn normalize_field_name(raw: &str) -> String {
    let upper = raw.to_uppercase();
    let mut key = String::with_capacity(upper.len());
    let mut in_separator = false;

    for c in upper.trim().chars() {
        if c.is_ascii_alphanumeric() {
            key.push(c);
            in_separator = false;
        } else if !in_separator {
            key.push('_');
            in_separator = true;
        }
    }

    key
}

/// A field referenced by a template placeholder
///
/// Keeps the raw text exactly as it appeared between the brackets or braces
/// (already trimmed) alongside its normalized key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldName {
    raw: String,
    normalized: String,
}

impl FieldName {
    /// Create a field name from its raw placeholder text
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = normalize_field_name(&raw);
        Self { raw, normalized }
    }

    /// The name as written in the template
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The canonical lookup key
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_spaces_and_case() {
        assert_eq!(normalize_field_name("insured name"), "INSURED_NAME");
        assert_eq!(normalize_field_name("  date loss  "), "DATE_LOSS");
    }

    #[test]
    fn test_normalize_collapses_separator_runs() {
        assert_eq!(normalize_field_name("insured -- h/street"), "INSURED_H_STREET");
        assert_eq!(normalize_field_name("a___b"), "A_B");
    }

    #[test]
    fn test_normalize_keeps_edge_separators() {
        assert_eq!(normalize_field_name("#name"), "_NAME");
        assert_eq!(normalize_field_name("name?"), "NAME_");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_field_name(""), "");
        assert_eq!(normalize_field_name("   "), "");
    }

    #[test]
    fn test_normalize_non_ascii_letters_become_separators() {
        assert_eq!(normalize_field_name("café name"), "CAF_NAME");
    }

    #[test]
    fn test_field_name_keeps_both_forms() {
        let name = FieldName::new("Date of Loss");
        assert_eq!(name.raw(), "Date of Loss");
        assert_eq!(name.normalized(), "DATE_OF_LOSS");
        assert_eq!(name.to_string(), "Date of Loss");
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(raw in "\\PC{0,40}") {
            let once = normalize_field_name(&raw);
            prop_assert_eq!(normalize_field_name(&once), once.clone());
        }

        #[test]
        fn prop_normalized_alphabet(raw in "\\PC{0,40}") {
            let key = normalize_field_name(&raw);
            prop_assert!(key.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'));
            prop_assert!(!key.contains("__"));
        }
    }
}
