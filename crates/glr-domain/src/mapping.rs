//! Field mappings produced by the extractors

use std::collections::btree_map;
use std::collections::BTreeMap;

/// A mapping from normalized field name to its extracted value
///
/// Unresolved fields hold the empty string; a declared field is never
/// absent. Keys are kept sorted so output and prompts are deterministic.
///
/// # Examples
///
/// ```
/// use glr_domain::FieldMapping;
///
/// let mut mapping = FieldMapping::with_fields(["INSURED_NAME", "DATE_LOSS"]);
/// mapping.set("INSURED_NAME", "Jane Doe");
///
/// assert_eq!(mapping.get("INSURED_NAME"), Some("Jane Doe"));
/// assert_eq!(mapping.get("DATE_LOSS"), Some(""));
/// assert_eq!(mapping.get("TOL_CODE"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMapping {
    values: BTreeMap<String, String>,
}

impl FieldMapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapping declaring each field with an empty value
    pub fn with_fields<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            values: fields.into_iter().map(|k| (k.into(), String::new())).collect(),
        }
    }

    /// Set a field's value, declaring the field if needed
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// Get a field's value
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Check whether a field is declared
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether no field is declared
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of fields holding a non-empty value
    pub fn resolved_count(&self) -> usize {
        self.values.values().filter(|v| !v.is_empty()).count()
    }

    /// Iterate over declared field names
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterate over `(field, value)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy every field of `other` into this mapping, replacing existing values
    pub fn overlay(&mut self, other: &FieldMapping) {
        for (field, value) in &other.values {
            self.values.insert(field.clone(), value.clone());
        }
    }

    /// Borrow the underlying ordered map
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Consume the mapping, returning the underlying ordered map
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.values
    }
}

impl From<BTreeMap<String, String>> for FieldMapping {
    fn from(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl IntoIterator for FieldMapping {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_fields_declares_empty_values() {
        let mapping = FieldMapping::with_fields(["A", "B"]);
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("A"), Some(""));
        assert_eq!(mapping.resolved_count(), 0);
    }

    #[test]
    fn test_overlay_replaces_and_extends() {
        let mut base: FieldMapping = [("A", "ai"), ("B", "ai")].into_iter().collect();
        let top: FieldMapping = [("B", ""), ("C", "det")].into_iter().collect();

        base.overlay(&top);

        assert_eq!(base.get("A"), Some("ai"));
        assert_eq!(base.get("B"), Some(""));
        assert_eq!(base.get("C"), Some("det"));
    }

    #[test]
    fn test_iteration_is_key_ordered() {
        let mapping: FieldMapping = [("Z", "1"), ("A", "2")].into_iter().collect();
        let fields: Vec<_> = mapping.fields().collect();
        assert_eq!(fields, vec!["A", "Z"]);
    }
}
