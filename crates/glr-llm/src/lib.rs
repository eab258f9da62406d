//! GLR LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `glr-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GeminiProvider`: Google Gemini `generateContent` API
//! - `OllamaProvider`: Local Ollama API
//! - `ConfiguredProvider`: One of the above (or none), chosen from [`LlmConfig`]
//!
//! Every provider makes exactly one attempt per prompt. Callers treat any
//! error as "no AI result" and carry on.
//!
//! # Examples
//!
//! ```
//! use glr_llm::MockProvider;
//! use glr_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new(r#"{"INSURED_NAME": "Jane Doe"}"#);
//! let result = provider.generate("test prompt").unwrap();
//! assert!(result.contains("Jane Doe"));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod configured;
pub mod gemini;
pub mod ollama;

use glr_domain::traits::LlmProvider as LlmProviderTrait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

pub use config::{LlmConfig, ProviderKind};
pub use configured::ConfiguredProvider;
pub use gemini::GeminiProvider;
pub use ollama::OllamaProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Request exceeded the configured timeout
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Provider cannot be used as configured
    #[error("Configuration error: {0}")]
    Config(String),

    /// AI extraction is switched off
    #[error("LLM provider disabled")]
    Disabled,

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

impl LlmError {
    pub(crate) fn from_reqwest(e: reqwest::Error, timeout_secs: u64) -> Self {
        if e.is_timeout() {
            LlmError::Timeout(timeout_secs)
        } else {
            LlmError::Communication(format!("Request failed: {}", e))
        }
    }
}

/// Run an async provider call to completion from synchronous code
///
/// Providers expose async methods; the domain trait is synchronous and is
/// called from a blocking task, so each call drives its own small runtime.
pub(crate) fn block_on<F, T>(future: F) -> Result<T, LlmError>
where
    F: std::future::Future<Output = Result<T, LlmError>>,
{
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?
        .block_on(future)
}

#[derive(Debug, Clone)]
enum MockResponse {
    Text(String),
    Error(String),
}

/// Mock LLM provider for deterministic testing
///
/// This provider returns pre-configured responses without making any network
/// calls. It records how often it was called and the last prompt it saw.
///
/// # Examples
///
/// ```
/// use glr_llm::MockProvider;
/// use glr_domain::traits::LlmProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("{}");
/// assert_eq!(provider.generate("any prompt").unwrap(), "{}");
///
/// // Every call fails, as a dead endpoint would
/// let provider = MockProvider::failing("connection refused");
/// assert!(provider.generate("any prompt").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: MockResponse,
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    call_count: Arc<AtomicUsize>,
    last_prompt: Arc<Mutex<Option<String>>>,
    model: String,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self::with_default(MockResponse::Text(response.into()))
    }

    /// Create a MockProvider whose every call fails with a communication error
    pub fn failing(reason: impl Into<String>) -> Self {
        Self::with_default(MockResponse::Error(reason.into()))
    }

    fn with_default(default_response: MockResponse) -> Self {
        Self {
            default_response,
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(AtomicUsize::new(0)),
            last_prompt: Arc::new(Mutex::new(None)),
            model: "mock".to_string(),
        }
    }

    /// Set the model name reported by this provider
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(prompt.into(), MockResponse::Text(response.into()));
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(prompt.into(), MockResponse::Error("Mock error".to_string()));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }

    /// The most recent prompt passed to generate
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("{}")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap_or_else(PoisonError::into_inner) = Some(prompt.to_string());

        let response = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(prompt)
            .cloned()
            .unwrap_or_else(|| self.default_response.clone());

        match response {
            MockResponse::Text(text) => Ok(text),
            MockResponse::Error(reason) => Err(LlmError::Communication(reason)),
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.generate("any prompt");
        assert_eq!(result.unwrap(), "Test response");
    }

    #[test]
    fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.generate("hello").unwrap(), "world");
        assert_eq!(provider.generate("foo").unwrap(), "bar");
        assert_eq!(provider.generate("unknown").unwrap(), "{}");
    }

    #[test]
    fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");

        assert_eq!(provider.call_count(), 0);
        provider.generate("prompt1").unwrap();
        provider.generate("prompt2").unwrap();
        assert_eq!(provider.call_count(), 2);

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad prompt");

        let result = provider.generate("bad prompt");
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }

    #[test]
    fn test_mock_provider_failing() {
        let provider = MockProvider::failing("connection refused");
        let err = provider.generate("anything").unwrap_err();
        assert!(err.to_string().contains("connection refused"));
        assert_eq!(provider.call_count(), 1);
    }

    #[test]
    fn test_mock_provider_records_last_prompt() {
        let provider = MockProvider::default();
        assert!(provider.last_prompt().is_none());
        provider.generate("first").unwrap();
        provider.generate("second").unwrap();
        assert_eq!(provider.last_prompt().as_deref(), Some("second"));
    }

    #[test]
    fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("test").with_model("mock-2");
        let provider2 = provider1.clone();

        provider1.generate("test").unwrap();

        assert_eq!(provider2.call_count(), 1);
        assert_eq!(provider2.model_name(), "mock-2");
    }
}
