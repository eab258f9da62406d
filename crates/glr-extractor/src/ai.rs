//! LLM-assisted field extraction

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_field_mapping;
use crate::prompt::PromptBuilder;
use glr_domain::traits::LlmProvider;
use glr_domain::{ExtractionOutcome, FieldMapping, PlaceholderSet, ReportCorpus};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Extracts the template's fields by prompting a language model
///
/// Makes one model call per run and never retries. Every failure after the
/// prompt is built (transport, timeout, unparseable response) is returned
/// as [`ExtractionOutcome::Failure`].
pub struct AiFieldExtractor<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    config: ExtractorConfig,
}

impl<L> AiFieldExtractor<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new AI extractor
    pub fn new(llm_provider: L, config: ExtractorConfig) -> Self {
        Self::with_shared(Arc::new(llm_provider), config)
    }

    /// Create a new AI extractor around a shared provider
    pub fn with_shared(llm_provider: Arc<L>, config: ExtractorConfig) -> Self {
        Self { llm_provider, config }
    }

    /// Extract the normalized placeholder fields from the corpus
    pub async fn extract(&self, placeholders: &PlaceholderSet, corpus: &ReportCorpus) -> ExtractionOutcome {
        let template = placeholders.empty_mapping();

        if template.is_empty() {
            debug!("Template declares no placeholders; skipping model call");
            return ExtractionOutcome::Success(template);
        }

        info!(
            "Starting AI extraction of {} fields with model '{}', corpus length {}",
            template.len(),
            self.llm_provider.model_name(),
            corpus.len()
        );

        match self.try_extract(&template, corpus).await {
            Ok(mapping) => {
                info!(
                    "AI extraction complete: {}/{} fields resolved",
                    mapping.resolved_count(),
                    mapping.len()
                );
                ExtractionOutcome::Success(mapping)
            }
            Err(e) => {
                warn!("AI extraction failed, continuing without it: {}", e);
                ExtractionOutcome::failure(e)
            }
        }
    }

    async fn try_extract(
        &self,
        template: &FieldMapping,
        corpus: &ReportCorpus,
    ) -> Result<FieldMapping, ExtractorError> {
        let report = self.prompt_text(corpus);
        let prompt = PromptBuilder::new(template, report).build()?;

        debug!("Prompt length: {} chars", prompt.len());

        let response = self.call_llm(prompt).await?;

        debug!("LLM response length: {} chars", response.len());

        parse_field_mapping(&response, template)
    }

    /// The corpus as embedded in the prompt, cut to `max_corpus_chars`
    fn prompt_text<'c>(&self, corpus: &'c ReportCorpus) -> &'c str {
        let text = corpus.as_str();
        match text.char_indices().nth(self.config.max_corpus_chars) {
            Some((cut, _)) => {
                warn!(
                    "Corpus truncated to {} characters for the prompt",
                    self.config.max_corpus_chars
                );
                &text[..cut]
            }
            None => text,
        }
    }

    /// Call the LLM provider
    async fn call_llm(&self, prompt: String) -> Result<String, ExtractorError> {
        let llm = Arc::clone(&self.llm_provider);

        // Call in a blocking context since LlmProvider is not async
        tokio::task::spawn_blocking(move || {
            llm.generate(&prompt)
                .map_err(|e| ExtractorError::Llm(e.to_string()))
        })
        .await
        .map_err(|e| ExtractorError::Llm(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glr_llm::MockProvider;

    fn placeholders() -> PlaceholderSet {
        ["Insured Name", "DATE_LOSS"].into_iter().collect()
    }

    #[tokio::test]
    async fn test_successful_extraction() {
        let llm = MockProvider::new(r#"{"INSURED_NAME": "Jane Doe", "DATE_LOSS": "3/4/2024"}"#);
        let extractor = AiFieldExtractor::new(llm, ExtractorConfig::default());

        let outcome = extractor
            .extract(&placeholders(), &ReportCorpus::from("report"))
            .await;

        let mapping = outcome.into_mapping();
        assert_eq!(mapping.get("INSURED_NAME"), Some("Jane Doe"));
        assert_eq!(mapping.get("DATE_LOSS"), Some("3/4/2024"));
    }

    #[tokio::test]
    async fn test_keys_are_exactly_normalized_placeholders() {
        let llm = MockProvider::new(r#"{"INSURED_NAME": "Jane", "EXTRA": "x"}"#);
        let extractor = AiFieldExtractor::new(llm, ExtractorConfig::default());

        let mapping = extractor
            .extract(&placeholders(), &ReportCorpus::from("report"))
            .await
            .into_mapping();

        let keys: Vec<_> = mapping.fields().collect();
        assert_eq!(keys, vec!["DATE_LOSS", "INSURED_NAME"]);
    }

    #[tokio::test]
    async fn test_transport_failure_becomes_outcome() {
        let llm = MockProvider::failing("connection reset");
        let extractor = AiFieldExtractor::new(llm, ExtractorConfig::default());

        let outcome = extractor
            .extract(&placeholders(), &ReportCorpus::from("report"))
            .await;

        assert!(outcome.failure_reason().unwrap().contains("connection reset"));
        assert!(outcome.mapping().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_response_becomes_outcome() {
        let extractor = AiFieldExtractor::new(MockProvider::new("not json"), ExtractorConfig::default());

        let outcome = extractor
            .extract(&placeholders(), &ReportCorpus::from("report"))
            .await;

        assert!(!outcome.is_success());
        assert!(outcome.mapping().is_empty());
    }

    #[tokio::test]
    async fn test_single_attempt() {
        let llm = Arc::new(MockProvider::failing("down"));
        let extractor = AiFieldExtractor::with_shared(Arc::clone(&llm), ExtractorConfig::default());

        extractor
            .extract(&placeholders(), &ReportCorpus::from("report"))
            .await;

        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_no_placeholders_skips_model() {
        let llm = Arc::new(MockProvider::new("{}"));
        let extractor = AiFieldExtractor::with_shared(Arc::clone(&llm), ExtractorConfig::default());

        let outcome = extractor
            .extract(&PlaceholderSet::new(), &ReportCorpus::from("report"))
            .await;

        assert!(outcome.is_success());
        assert!(outcome.mapping().is_empty());
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_prompt_carries_template_and_corpus() {
        let llm = Arc::new(MockProvider::new("{}"));
        let extractor = AiFieldExtractor::with_shared(Arc::clone(&llm), ExtractorConfig::default());

        extractor
            .extract(&placeholders(), &ReportCorpus::from("Insured: Jane Doe\n"))
            .await;

        let prompt = llm.last_prompt().unwrap();
        assert!(prompt.contains("\"INSURED_NAME\": \"\""));
        assert!(prompt.contains("\"DATE_LOSS\": \"\""));
        assert!(prompt.contains("Insured: Jane Doe"));
    }

    #[tokio::test]
    async fn test_prompt_truncates_long_corpus() {
        let llm = Arc::new(MockProvider::new("{}"));
        let config = ExtractorConfig {
            max_corpus_chars: 10,
            ..ExtractorConfig::default()
        };
        let extractor = AiFieldExtractor::with_shared(Arc::clone(&llm), config);

        extractor
            .extract(&placeholders(), &ReportCorpus::from("0123456789ABCDEF"))
            .await;

        let prompt = llm.last_prompt().unwrap();
        assert!(prompt.contains("\"\"\"0123456789\"\"\""));
        assert!(!prompt.contains("ABCDEF"));
    }
}
