//! OpenRouter Provider Implementation
//!
//! Blocking client for OpenRouter's OpenAI-compatible chat-completions API.
//! Each prompt is sent as the user message after a fixed system message.
//!
//! # Examples
//!
//! ```no_run
//! use metaform_llm::OpenRouterProvider;
//! use metaform_domain::LlmProvider;
//! use std::time::Duration;
//!
//! let provider = OpenRouterProvider::new(
//!     "sk-or-...",
//!     "mistralai/mistral-7b-instruct",
//!     Duration::from_secs(120),
//! )?;
//! let answer = provider.generate("Return {\"ok\": true}")?;
//! # Ok::<(), metaform_llm::LlmError>(())
//! ```

use crate::LlmError;
use metaform_domain::LlmProvider as LlmProviderTrait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default OpenRouter API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1";

/// Default model
pub const DEFAULT_MODEL: &str = "mistralai/mistral-7b-instruct";

/// Default timeout for a completion request
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// System message sent ahead of every prompt
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You convert unstructured content into strict JSON format given a schema.";

/// OpenRouter chat-completions provider
pub struct OpenRouterProvider {
    endpoint: String,
    model: String,
    api_key: String,
    referer: Option<String>,
    system_prompt: String,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenRouterProvider {
    /// Create a provider for `model` authenticated with `api_key`
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::MissingCredential`] for a blank key, and
    /// [`LlmError::Communication`] if the HTTP client cannot be built.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::MissingCredential(
                "an OpenRouter API key is required".to_string(),
            ));
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Communication(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: model.into(),
            api_key,
            referer: None,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            client,
        })
    }

    /// Use a different API base URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Send an `HTTP-Referer` header identifying the calling application
    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }

    /// Replace the system message
    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    /// API base URL in use
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &self.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        }
    }
}

/// Pull `choices[0].message.content` out of a completion response
fn parse_completion(body: &str) -> Result<String, LlmError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| LlmError::InvalidResponse("response has no message content".to_string()))
}

impl LlmProviderTrait for OpenRouterProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        debug!(
            "Requesting completion from {} ({} prompt chars)",
            self.model,
            prompt.len()
        );

        let mut request = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&self.request_body(prompt));
        if let Some(referer) = &self.referer {
            request = request.header("HTTP-Referer", referer);
        }

        let response = request
            .send()
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| LlmError::Communication(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(LlmError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let content = parse_completion(&body)?;
        debug!("Received {} response chars", content.len());
        Ok(content)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
