//! The end-to-end run

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use glr_domain::traits::{LlmProvider, ReportTextProvider};
use glr_domain::{ExtractionOutcome, FieldMapping, PlaceholderSet};
use glr_extractor::{merge, AiFieldExtractor, DeterministicExtraction, DeterministicExtractor};
use glr_reports::ReportDocument;
use glr_template::{discover_placeholders, render, RenderedDocument, TemplateDocument};
use tracing::{info, warn};

/// What one run works on
#[derive(Debug, Clone)]
pub struct PipelineInput<D = ReportDocument> {
    /// Template DOCX bytes
    pub template: Option<Vec<u8>>,
    /// Source reports, in corpus order
    pub reports: Vec<D>,
}

/// Everything a run produced
#[derive(Debug, Clone)]
pub struct PipelineRun {
    /// Raw names found in the template
    pub placeholders: PlaceholderSet,
    /// Length of the report corpus in bytes
    pub corpus_len: usize,
    /// Rule-based mapping with per-rule results
    pub deterministic: DeterministicExtraction,
    /// Model-based mapping, or why there is none
    pub ai: ExtractionOutcome,
    /// The mapping the template was filled with
    pub merged: FieldMapping,
    /// The filled-in report
    pub document: RenderedDocument,
}

/// Report-filling pipeline
///
/// Generic over the model provider and the report reader so both can be
/// replaced in tests.
pub struct Pipeline<L, R>
where
    L: LlmProvider,
{
    reports: R,
    deterministic: DeterministicExtractor,
    ai: AiFieldExtractor<L>,
    config: PipelineConfig,
}

impl<L, R> Pipeline<L, R>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
    R: ReportTextProvider,
    R::Error: std::error::Error + Send + Sync + 'static,
{
    /// Create a pipeline from validated configuration
    pub fn new(llm: L, reports: R, config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate()?;

        Ok(Self {
            reports,
            deterministic: DeterministicExtractor::new(&config.extractor),
            ai: AiFieldExtractor::new(llm, config.extractor.clone()),
            config,
        })
    }

    /// The configuration this pipeline was built with
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run deterministic extraction only
    pub fn extract_deterministic(&self, reports: &[R::Document]) -> Result<DeterministicExtraction, PipelineError> {
        if reports.is_empty() {
            return Err(PipelineError::MissingInput("at least one report is required".to_string()));
        }

        let corpus = self.reports.corpus(reports).map_err(PipelineError::report)?;
        Ok(self.deterministic.extract(&corpus))
    }

    /// Fill the template from the reports
    ///
    /// # Errors
    ///
    /// Fails before any extraction when the template or reports are missing
    /// or unreadable. A failed model call does not fail the run.
    pub async fn run(&self, input: PipelineInput<R::Document>) -> Result<PipelineRun, PipelineError> {
        let template_bytes = input
            .template
            .ok_or_else(|| PipelineError::MissingInput("a template is required".to_string()))?;
        if input.reports.is_empty() {
            return Err(PipelineError::MissingInput("at least one report is required".to_string()));
        }

        let template = TemplateDocument::from_bytes(template_bytes)?;
        let corpus = self.reports.corpus(&input.reports).map_err(PipelineError::report)?;

        info!(
            "Starting run: {} reports, corpus length {}",
            input.reports.len(),
            corpus.len()
        );

        let placeholders = discover_placeholders(&template);

        // The AI future is polled first so its blocking call is in flight
        // while the rules run.
        let (ai, deterministic) = tokio::join!(self.ai.extract(&placeholders, &corpus), async {
            self.deterministic.extract(&corpus)
        });

        if let Some(reason) = ai.failure_reason() {
            warn!("Continuing with deterministic fields only: {}", reason);
        }

        let merged = merge(&ai.mapping(), &deterministic.mapping);
        let document = render(&template, &merged)?.with_file_name(&self.config.output.file_name);

        info!(
            "Run complete: {} placeholders, {}/{} merged fields resolved",
            placeholders.len(),
            merged.resolved_count(),
            merged.len()
        );

        Ok(PipelineRun {
            placeholders,
            corpus_len: corpus.len(),
            deterministic,
            ai,
            merged,
            document,
        })
    }
}
