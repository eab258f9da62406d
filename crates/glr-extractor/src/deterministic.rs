//! Deterministic, pattern-based field extraction

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::rules::{effective_rules, RuleSpec, DETERMINISTIC_FIELDS};
use glr_domain::{normalize_field_name, FieldMapping, ReportCorpus};
use regex::{Regex, RegexBuilder};
use tracing::{debug, info, warn};

/// What happened when a rule ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleStatus {
    /// The pattern matched and its fields were filled
    Matched,
    /// The pattern did not match; its fields stay empty
    NoMatch,
    /// The rule could not run; its fields stay empty
    Failed(String),
}

/// Per-rule record of one extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleReport {
    /// Rule name
    pub rule: String,
    /// Result of running it
    pub status: RuleStatus,
}

/// Result of a deterministic extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeterministicExtraction {
    /// Every schema field, `""` where no rule filled it
    pub mapping: FieldMapping,
    /// One entry per rule, in application order
    pub rules: Vec<RuleReport>,
}

impl DeterministicExtraction {
    /// Rules that could not run
    pub fn failures(&self) -> impl Iterator<Item = &RuleReport> {
        self.rules
            .iter()
            .filter(|r| matches!(r.status, RuleStatus::Failed(_)))
    }
}

struct CompiledRule {
    spec: RuleSpec,
    fields: Vec<(String, usize)>,
    regex: Result<Regex, ExtractorError>,
}

impl CompiledRule {
    fn compile(spec: RuleSpec) -> Self {
        let fields = spec
            .captures
            .iter()
            .map(|c| (normalize_field_name(&c.field), c.group))
            .collect();
        let regex = compile_pattern(&spec);
        Self { spec, fields, regex }
    }

    fn apply(&self, text: &str, mapping: &mut FieldMapping) -> RuleStatus {
        let regex = match &self.regex {
            Ok(regex) => regex,
            Err(e) => return RuleStatus::Failed(e.to_string()),
        };

        let Some(captures) = regex.captures(text) else {
            return RuleStatus::NoMatch;
        };

        for (field, group) in &self.fields {
            let value = captures.get(*group).map(|m| m.as_str().trim()).unwrap_or("");
            mapping.set(field.clone(), value);
        }
        RuleStatus::Matched
    }
}

fn compile_pattern(spec: &RuleSpec) -> Result<Regex, ExtractorError> {
    let regex = RegexBuilder::new(&spec.pattern)
        .case_insensitive(spec.case_insensitive)
        .build()
        .map_err(|e| ExtractorError::InvalidRule {
            rule: spec.name.clone(),
            reason: e.to_string(),
        })?;

    // captures_len counts the implicit whole-match group 0
    let available = regex.captures_len() - 1;
    if let Some(capture) = spec.captures.iter().find(|c| c.group == 0 || c.group > available) {
        return Err(ExtractorError::InvalidRule {
            rule: spec.name.clone(),
            reason: format!(
                "capture group {} for {} is out of range (pattern has {})",
                capture.group, capture.field, available
            ),
        });
    }

    Ok(regex)
}

/// Extracts the fixed field schema with ordered pattern rules
///
/// Rules are compiled once at construction. A rule that fails to compile is
/// kept and reported as failed on every run, so the remaining rules still
/// produce their fields.
pub struct DeterministicExtractor {
    rules: Vec<CompiledRule>,
    schema: Vec<String>,
}

impl DeterministicExtractor {
    /// Build an extractor from the built-in rules plus configured ones
    pub fn new(config: &ExtractorConfig) -> Self {
        let rules: Vec<CompiledRule> = effective_rules(&config.rules)
            .into_iter()
            .map(CompiledRule::compile)
            .collect();

        for rule in &rules {
            if let Err(e) = &rule.regex {
                warn!("{}", e);
            }
        }

        let mut schema: Vec<String> = DETERMINISTIC_FIELDS.iter().map(|f| f.to_string()).collect();
        for rule in &rules {
            for (field, _) in &rule.fields {
                if !schema.contains(field) {
                    schema.push(field.clone());
                }
            }
        }

        Self { rules, schema }
    }

    /// Fields this extractor always reports
    pub fn schema(&self) -> &[String] {
        &self.schema
    }

    /// Run every rule against the corpus
    pub fn extract(&self, corpus: &ReportCorpus) -> DeterministicExtraction {
        let text = corpus.as_str();
        let mut mapping = FieldMapping::with_fields(self.schema.iter().cloned());
        let mut reports = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let status = rule.apply(text, &mut mapping);
            match &status {
                RuleStatus::Matched => debug!("Rule '{}' matched", rule.spec.name),
                RuleStatus::NoMatch => debug!("Rule '{}' did not match", rule.spec.name),
                RuleStatus::Failed(reason) => warn!("Rule '{}' skipped: {}", rule.spec.name, reason),
            }
            reports.push(RuleReport {
                rule: rule.spec.name.clone(),
                status,
            });
        }

        info!(
            "Deterministic extraction: {}/{} fields resolved",
            mapping.resolved_count(),
            mapping.len()
        );

        DeterministicExtraction {
            mapping,
            rules: reports,
        }
    }
}

impl Default for DeterministicExtractor {
    fn default() -> Self {
        Self::new(&ExtractorConfig::default())
    }
}
