//! GLR Domain Layer
//!
//! Core value types shared by every stage of the report-filling pipeline.
//! Like the rest of the domain layer it has no external dependencies: I/O,
//! model transports and document containers live in other crates and plug in
//! through the traits in [`traits`].
//!
//! ## Key Concepts
//!
//! - **FieldName**: a placeholder name in raw and normalized form
//! - **PlaceholderSet**: the distinct raw names a template references
//! - **ReportCorpus**: the concatenated text of every report page
//! - **FieldMapping**: normalized field name → value, `""` when unresolved
//! - **ExtractionOutcome**: an extractor's mapping, or why it has none

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod corpus;
pub mod field;
pub mod mapping;
pub mod outcome;
pub mod placeholder;
pub mod traits;

// Re-exports for convenience
pub use corpus::ReportCorpus;
pub use field::{normalize_field_name, FieldName};
pub use mapping::FieldMapping;
pub use outcome::ExtractionOutcome;
pub use placeholder::PlaceholderSet;
