//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use glr_domain::{ExtractionOutcome, FieldMapping, PlaceholderSet};
use glr_extractor::{DeterministicExtraction, RuleReport, RuleStatus};
use glr_pipeline::PipelineRun;
use serde_json::json;
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the placeholders of a template.
    pub fn format_placeholders(&self, placeholders: &PlaceholderSet) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let names: Vec<_> = placeholders
                    .field_names()
                    .map(|name| json!({ "raw": name.raw(), "normalized": name.normalized() }))
                    .collect();
                Ok(serde_json::to_string_pretty(&names)?)
            }
            OutputFormat::Table => {
                if placeholders.is_empty() {
                    return Ok(self.colorize("No placeholders found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Placeholder", "Field"]);
                for name in placeholders.field_names() {
                    builder.push_record([name.raw(), name.normalized()]);
                }
                Ok(Self::render_table(builder))
            }
        }
    }

    /// Format a field mapping.
    pub fn format_mapping(&self, mapping: &FieldMapping) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(mapping.as_map())?),
            OutputFormat::Table => Ok(self.mapping_table(mapping)),
        }
    }

    /// Format a deterministic extraction with its per-rule results.
    pub fn format_extraction(&self, extraction: &DeterministicExtraction) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "fields": extraction.mapping.as_map(),
                "rules": Self::rules_json(&extraction.rules),
            }))?),
            OutputFormat::Table => Ok(format!(
                "{}\n{}",
                self.mapping_table(&extraction.mapping),
                self.rules_table(&extraction.rules)
            )),
        }
    }

    /// Format the result of a fill run.
    pub fn format_run(&self, run: &PipelineRun, output: &Path) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let ai = match &run.ai {
                    ExtractionOutcome::Success(mapping) => json!({ "status": "success", "fields": mapping.as_map() }),
                    ExtractionOutcome::Failure(reason) => json!({ "status": "failure", "reason": reason }),
                };
                Ok(serde_json::to_string_pretty(&json!({
                    "placeholders": run.placeholders.iter().collect::<Vec<_>>(),
                    "deterministic": run.deterministic.mapping.as_map(),
                    "ai": ai,
                    "merged": run.merged.as_map(),
                    "output": output.display().to_string(),
                }))?)
            }
            OutputFormat::Table => {
                let mut out = String::new();

                out.push_str(&self.heading("Placeholders"));
                out.push_str(&self.format_placeholders(&run.placeholders)?);
                out.push_str("\n\n");

                out.push_str(&self.heading("Deterministic fields"));
                out.push_str(&self.mapping_table(&run.deterministic.mapping));
                out.push_str("\n\n");

                out.push_str(&self.heading("AI fields"));
                match &run.ai {
                    ExtractionOutcome::Success(mapping) => out.push_str(&self.mapping_table(mapping)),
                    ExtractionOutcome::Failure(reason) => {
                        out.push_str(&self.warning(&format!("AI extraction failed: {}", reason)))
                    }
                }
                out.push_str("\n\n");

                out.push_str(&self.heading("Merged fields"));
                out.push_str(&self.mapping_table(&run.merged));
                out.push_str("\n\n");

                out.push_str(&self.success(&format!("Report written to {}", output.display())));
                Ok(out)
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn heading(&self, title: &str) -> String {
        format!("{}\n", self.colorize(title, "cyan"))
    }

    fn mapping_table(&self, mapping: &FieldMapping) -> String {
        if mapping.is_empty() {
            return self.colorize("No fields.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (field, value) in mapping.iter() {
            builder.push_record([field, value]);
        }
        Self::render_table(builder)
    }

    fn rules_table(&self, rules: &[RuleReport]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Rule", "Result"]);
        for report in rules {
            let status = match &report.status {
                RuleStatus::Matched => self.colorize("matched", "green"),
                RuleStatus::NoMatch => "no match".to_string(),
                RuleStatus::Failed(reason) => self.colorize(&format!("failed: {}", reason), "red"),
            };
            builder.push_record([report.rule.clone(), status]);
        }
        Self::render_table(builder)
    }

    fn rules_json(rules: &[RuleReport]) -> Vec<serde_json::Value> {
        rules
            .iter()
            .map(|report| match &report.status {
                RuleStatus::Matched => json!({ "rule": report.rule, "status": "matched" }),
                RuleStatus::NoMatch => json!({ "rule": report.rule, "status": "no_match" }),
                RuleStatus::Failed(reason) => json!({ "rule": report.rule, "status": "failed", "reason": reason }),
            })
            .collect()
    }

    fn render_table(builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
