//! GLR Pipeline
//!
//! Fills a General Loss Report template from inspection reports.
//!
//! # Flow
//!
//! ```text
//! template ──> discover placeholders ─────────────┐
//!                                                 v
//! reports ──> corpus ─┬─> deterministic rules ──> merge ──> render ──> DOCX
//!                     └─> AI extraction ──────────^
//! ```
//!
//! Inputs are checked before any extraction: a missing template or an empty
//! report list is [`PipelineError::MissingInput`], an unreadable template or
//! report is [`PipelineError::Template`] / [`PipelineError::Report`]. After
//! that the run always completes; an AI failure only leaves the AI mapping
//! empty.
//!
//! # Example
//!
//! ```no_run
//! use glr_llm::ConfiguredProvider;
//! use glr_pipeline::{Pipeline, PipelineConfig, PipelineInput};
//! use glr_reports::{PdfTextProvider, ReportDocument};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PipelineConfig::default();
//! let llm = ConfiguredProvider::from_config(&config.llm)?;
//! let pipeline = Pipeline::new(llm, PdfTextProvider::new(), config)?;
//!
//! let input = PipelineInput {
//!     template: Some(std::fs::read("template.docx")?),
//!     reports: vec![ReportDocument::from_path("inspection.pdf")?],
//! };
//! let run = pipeline.run(input).await?;
//! let path = run.document.write_to(&pipeline.config().output.directory)?;
//! println!("Report written to {}", path.display());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{ConfigError, OutputConfig, PipelineConfig};
pub use error::PipelineError;
pub use pipeline::{Pipeline, PipelineInput, PipelineRun};
