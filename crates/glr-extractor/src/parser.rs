//! Parse LLM output into a field mapping

use crate::error::ExtractorError;
use glr_domain::{normalize_field_name, FieldMapping};
use serde_json::Value;
use tracing::debug;

/// Remove markdown code-fence markers from a model response
///
/// Models often wrap JSON in ```` ```json ```` fences despite being told not
/// to; the markers are dropped wherever they appear.
pub fn strip_code_fences(response: &str) -> String {
    response
        .trim()
        .replace("```json", "")
        .replace("```JSON", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Parse a model response into values for the requested fields
///
/// Starts from `template` (every requested field, empty) and fills in the
/// fields the response provides. Response keys are normalized before
/// lookup; keys that were not requested are dropped.
///
/// # Errors
///
/// Returns an error if the response is not JSON or not a JSON object.
pub fn parse_field_mapping(response: &str, template: &FieldMapping) -> Result<FieldMapping, ExtractorError> {
    let json_str = strip_code_fences(response);

    let json: Value = serde_json::from_str(&json_str)
        .map_err(|e| ExtractorError::InvalidFormat(format!("JSON parse error: {}", e)))?;

    let object = json
        .as_object()
        .ok_or_else(|| ExtractorError::InvalidFormat("Expected JSON object".to_string()))?;

    let mut mapping = template.clone();
    for (key, value) in object {
        let field = normalize_field_name(key);
        if !template.contains(&field) {
            debug!("Dropping unrequested field '{}' from model response", key);
            continue;
        }
        mapping.set(field, value_text(value));
    }

    Ok(mapping)
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
