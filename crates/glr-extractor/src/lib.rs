//! GLR Extractor
//!
//! Turns the text of inspection reports into field mappings and reconciles
//! them into the single mapping used to fill a report template.
//!
//! # Architecture
//!
//! ```text
//!                 ┌─> DeterministicExtractor (fixed schema, pattern rules) ─┐
//! ReportCorpus ───┤                                                         ├─> merge ─> FieldMapping
//!                 └─> AiFieldExtractor (template schema, LLM) ──────────────┘
//! ```
//!
//! # Key Features
//!
//! - **Pattern rules**: Built-in rules for insured name, risk address, loss
//!   and inspection dates and mortgage company, extendable from TOML
//! - **Rule isolation**: A failing rule blanks only its own fields
//! - **LLM extraction**: One prompt per run over the template's placeholders
//! - **Outcome values**: AI failures become [`ExtractionOutcome::Failure`]
//!   instead of errors, so the run always continues
//! - **Fixed precedence**: Deterministic fields always win the merge
//!
//! # Example Usage
//!
//! ```no_run
//! use glr_domain::{PlaceholderSet, ReportCorpus};
//! use glr_extractor::{merge, AiFieldExtractor, DeterministicExtractor, ExtractorConfig};
//! use glr_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExtractorConfig::default();
//! let corpus = ReportCorpus::from("Insured: Jane Doe\nDate of Loss: 3/4/2024\n");
//! let placeholders: PlaceholderSet = ["INSURED_NAME", "CLAIM_NUMBER"].into_iter().collect();
//!
//! let deterministic = DeterministicExtractor::new(&config).extract(&corpus);
//! let ai = AiFieldExtractor::new(MockProvider::new(r#"{"CLAIM_NUMBER": "C-17"}"#), config)
//!     .extract(&placeholders, &corpus)
//!     .await;
//!
//! let merged = merge(&ai.mapping(), &deterministic.mapping);
//! assert_eq!(merged.get("INSURED_NAME"), Some("Jane Doe"));
//! assert_eq!(merged.get("CLAIM_NUMBER"), Some("C-17"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod ai;
mod config;
mod deterministic;
mod error;
mod merge;
mod parser;
mod prompt;
mod rules;


pub use ai::AiFieldExtractor;
pub use config::ExtractorConfig;
pub use deterministic::{DeterministicExtraction, DeterministicExtractor, RuleReport, RuleStatus};
pub use error::ExtractorError;
pub use glr_domain::ExtractionOutcome;
pub use merge::merge;
pub use parser::{parse_field_mapping, strip_code_fences};
pub use prompt::PromptBuilder;
pub use rules::{builtin_rules, CaptureSpec, RuleSpec, DETERMINISTIC_FIELDS};
