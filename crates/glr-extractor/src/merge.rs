//! Reconcile the two extractions into one mapping

use glr_domain::FieldMapping;
use tracing::debug;

/// Merge the AI mapping with the deterministic mapping
///
/// The deterministic mapping is laid over the AI mapping: every field it
/// declares wins, even when its value is `""` and the AI found something.
/// Fields only the AI produced keep the AI value. The result declares the
/// union of both key sets.
///
/// # Examples
///
/// ```
/// use glr_domain::FieldMapping;
/// use glr_extractor::merge;
///
/// let ai: FieldMapping = [("INSURED_NAME", "J. Doe"), ("CLAIM", "C-1")].into_iter().collect();
/// let det: FieldMapping = [("INSURED_NAME", "Jane Doe"), ("TOL_CODE", "")].into_iter().collect();
///
/// let merged = merge(&ai, &det);
/// assert_eq!(merged.get("INSURED_NAME"), Some("Jane Doe"));
/// assert_eq!(merged.get("CLAIM"), Some("C-1"));
/// assert_eq!(merged.get("TOL_CODE"), Some(""));
/// ```
pub fn merge(ai: &FieldMapping, deterministic: &FieldMapping) -> FieldMapping {
    let mut merged = ai.clone();

    for (field, value) in deterministic.iter() {
        if let Some(ai_value) = ai.get(field) {
            if !ai_value.is_empty() && ai_value != value {
                debug!("Deterministic value overrides AI value for {}", field);
            }
        }
    }

    merged.overlay(deterministic);
    merged
}
