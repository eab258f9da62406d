//! LLM prompt for field extraction

use crate::error::ExtractorError;
use glr_domain::FieldMapping;

/// Builds the extraction prompt for one template and one corpus
pub struct PromptBuilder<'a> {
    fields: &'a FieldMapping,
    report: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    ///
    /// `fields` is the template mapping (every requested field with an empty
    /// value); `report` is the report text to embed.
    pub fn new(fields: &'a FieldMapping, report: &'a str) -> Self {
        Self { fields, report }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> Result<String, ExtractorError> {
        let fields_json = serde_json::to_string_pretty(self.fields.as_map())?;

        let mut prompt = String::new();

        // 1. Role and rules
        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. The field template, to be returned filled in
        prompt.push_str("FIELDS:\n");
        prompt.push_str(&fields_json);
        prompt.push_str("\n\n");

        // 3. The report text
        prompt.push_str("REPORT:\n\"\"\"");
        prompt.push_str(self.report);
        prompt.push_str("\"\"\"\n");

        Ok(prompt)
    }
}

const EXTRACTION_INSTRUCTIONS: &str = r#"You are an insurance extraction AI.

Extract values and return ONLY valid JSON.

Rules:
- Do NOT change field names.
- Use exact wording from the report.
- Extract full addresses, city, state, zip even if split across lines.
- If a field is missing, return "".
- Dates must be copied exactly."#;
