//! Pattern rules for deterministic extraction

use serde::{Deserialize, Serialize};

/// The fixed deterministic schema
///
/// Every field here is present in the deterministic mapping, and therefore
/// overrides the AI value in the merge, whether or not a rule fills it.
pub const DETERMINISTIC_FIELDS: [&str; 11] = [
    "INSURED_H_STREET",
    "INSURED_H_CITY",
    "INSURED_H_STATE",
    "INSURED_H_ZIP",
    "DATE_LOSS",
    "DATE_INSPECTED",
    "DATE_RECEIVED",
    "INSURED_NAME",
    "MORTGAGEE",
    "MORTGAGE_CO",
    "TOL_CODE",
];

/// One capture group written to one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureSpec {
    /// Target field (normalized on use)
    pub field: String,

    /// Capture group index, 1-based
    pub group: usize,
}

/// A named pattern and the fields its capture groups fill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Rule name; a configured rule replaces the built-in of the same name
    pub name: String,

    /// Regular expression (Rust `regex` syntax)
    pub pattern: String,

    /// Match ignoring case
    #[serde(default)]
    pub case_insensitive: bool,

    /// Capture groups to copy into fields
    pub captures: Vec<CaptureSpec>,
}

impl RuleSpec {
    fn new(name: &str, pattern: &str, captures: &[(&str, usize)]) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            case_insensitive: false,
            captures: captures
                .iter()
                .map(|(field, group)| CaptureSpec {
                    field: field.to_string(),
                    group: *group,
                })
                .collect(),
        }
    }

    fn ignoring_case(mut self) -> Self {
        self.case_insensitive = true;
        self
    }
}

/// The built-in rules, in application order
pub fn builtin_rules() -> Vec<RuleSpec> {
    vec![
        RuleSpec::new("insured-name", r"Insured:\s*(.+)", &[("INSURED_NAME", 1)]),
        RuleSpec::new(
            "risk-address",
            r"Risk address\s*\n(.+?)\n(.+?),\s*([A-Z]{2})\s*(\d{5})",
            &[
                ("INSURED_H_STREET", 1),
                ("INSURED_H_CITY", 2),
                ("INSURED_H_STATE", 3),
                ("INSURED_H_ZIP", 4),
            ],
        ),
        RuleSpec::new(
            "date-inspected",
            r"Date Taken\s*[:\-]?\s*(\d{1,2}/\d{1,2}/\d{4})",
            &[("DATE_INSPECTED", 1)],
        ),
        RuleSpec::new(
            "mortgage-company",
            r"mortgage company was verified as\s*([^\n.]+)",
            &[("MORTGAGE_CO", 1)],
        )
        .ignoring_case(),
        RuleSpec::new(
            "date-of-loss",
            r"Date of Loss\s*[:\-]?\s*(\d{1,2}/\d{1,2}/\d{4})",
            &[("DATE_LOSS", 1)],
        ),
    ]
}

/// Built-in rules with configured rules applied
///
/// A configured rule whose name matches a built-in takes its place; any
/// other configured rule runs after the built-ins, in configured order.
pub(crate) fn effective_rules(configured: &[RuleSpec]) -> Vec<RuleSpec> {
    let mut rules = builtin_rules();
    for rule in configured {
        match rules.iter_mut().find(|r| r.name == rule.name) {
            Some(existing) => *existing = rule.clone(),
            None => rules.push(rule.clone()),
        }
    }
    rules
}
