//! Metaform LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `metaform-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenRouterProvider`: OpenRouter chat-completions API
//!
//! # Examples
//!
//! ```
//! use metaform_llm::MockProvider;
//! use metaform_domain::LlmProvider;
//!
//! let provider = MockProvider::new("{\"ok\": true}");
//! let result = provider.generate("test prompt").unwrap();
//! assert_eq!(result, "{\"ok\": true}");
//! ```

#![warn(missing_docs)]

pub mod openrouter;

use metaform_domain::LlmProvider as LlmProviderTrait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

pub use openrouter::OpenRouterProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or transport failure
    #[error("Communication error: {0}")]
    Communication(String),

    /// The provider answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Http {
        /// Status code
        status: u16,
        /// Response body, verbatim
        body: String,
    },

    /// Response did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// No API key was supplied
    #[error("Missing API key: {0}")]
    MissingCredential(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Model name reported by [`MockProvider`]
pub const MOCK_MODEL: &str = "mock";

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without any network calls. Clones share
/// their responses, recorded prompts and call count.
///
/// # Examples
///
/// ```
/// use metaform_llm::MockProvider;
/// use metaform_domain::LlmProvider;
///
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// assert_eq!(provider.generate("prompt1").unwrap(), "response1");
/// assert_eq!(provider.prompts(), vec!["prompt1".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    failures: Arc<Mutex<HashSet<String>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            failures: Arc::new(Mutex::new(HashSet::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), response.into());
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        lock(&self.failures).insert(prompt.into());
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        lock(&self.prompts).len()
    }

    /// Prompts received so far, oldest first
    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }

    /// Forget recorded prompts
    pub fn reset_call_count(&self) {
        lock(&self.prompts).clear();
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        lock(&self.prompts).push(prompt.to_string());

        if lock(&self.failures).contains(prompt) {
            return Err(LlmError::Other("Mock error".to_string()));
        }
        Ok(lock(&self.responses)
            .get(prompt)
            .cloned()
            .unwrap_or_else(|| self.default_response.clone()))
    }

    fn model_name(&self) -> &str {
        MOCK_MODEL
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
