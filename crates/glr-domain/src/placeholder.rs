//! The set of field names a template references

use crate::field::{normalize_field_name, FieldName};
use crate::mapping::FieldMapping;
use std::collections::BTreeSet;

/// Distinct raw field names discovered in a template
///
/// Duplicates collapse; iteration order is sorted and carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderSet {
    names: BTreeSet<String>,
}

impl PlaceholderSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw name; returns false if it was already present
    pub fn insert(&mut self, raw: impl Into<String>) -> bool {
        self.names.insert(raw.into())
    }

    /// Check whether a raw name is present
    pub fn contains(&self, raw: &str) -> bool {
        self.names.contains(raw)
    }

    /// Number of distinct raw names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check whether the template referenced no fields
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over raw names
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Iterate over the names with both their raw and normalized forms
    pub fn field_names(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.names.iter().map(|raw| FieldName::new(raw.as_str()))
    }

    /// Distinct normalized keys
    ///
    /// Raw names that differ only in case or punctuation share one key.
    pub fn normalized_keys(&self) -> BTreeSet<String> {
        self.names.iter().map(|raw| normalize_field_name(raw)).collect()
    }

    /// A mapping declaring every normalized key with an empty value
    pub fn empty_mapping(&self) -> FieldMapping {
        FieldMapping::with_fields(self.normalized_keys())
    }
}

impl<S: Into<String>> FromIterator<S> for PlaceholderSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapse() {
        let mut set = PlaceholderSet::new();
        assert!(set.insert("INSURED_NAME"));
        assert!(!set.insert("INSURED_NAME"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_normalized_keys_merge_spellings() {
        let set: PlaceholderSet = ["insured name", "INSURED_NAME", "Date Loss"].into_iter().collect();
        let keys: Vec<_> = set.normalized_keys().into_iter().collect();
        assert_eq!(keys, vec!["DATE_LOSS".to_string(), "INSURED_NAME".to_string()]);
    }

    #[test]
    fn test_empty_mapping_has_every_key() {
        let set: PlaceholderSet = ["a b", "c"].into_iter().collect();
        let mapping = set.empty_mapping();
        assert_eq!(mapping.get("A_B"), Some(""));
        assert_eq!(mapping.get("C"), Some(""));
        assert_eq!(mapping.len(), 2);
    }
}
