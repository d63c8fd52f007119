//! Configuration for the Extractor

use metaform_llm::openrouter::{
    DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT, DEFAULT_TIMEOUT_SECS,
};
use metaform_llm::{LlmError, OpenRouterProvider};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Referer sent to OpenRouter to identify the application
pub const DEFAULT_REFERER: &str = "https://metaform-demo.streamlit.app/";

/// Configuration for the Extractor
///
/// Holds everything needed to reach the model except the API key, which is
/// supplied at runtime and never written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Model identifier
    pub model: String,

    /// API base URL
    pub endpoint: String,

    /// `HTTP-Referer` header value; omitted when unset
    pub referer: Option<String>,

    /// Maximum time for a single model call (seconds)
    pub request_timeout_secs: u64,

    /// System message sent with every prompt
    pub system_prompt: String,
}

impl ExtractorConfig {
    /// Get the request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("model cannot be empty".to_string());
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(format!("endpoint must be an http(s) URL, got '{}'", self.endpoint));
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        if self.system_prompt.trim().is_empty() {
            return Err("system_prompt cannot be empty".to_string());
        }
        Ok(())
    }

    /// Build an OpenRouter provider from this configuration
    pub fn provider(&self, api_key: &str) -> Result<OpenRouterProvider, LlmError> {
        let provider = OpenRouterProvider::new(api_key, self.model.clone(), self.request_timeout())?
            .with_endpoint(self.endpoint.clone())
            .with_system_prompt(self.system_prompt.clone());

        Ok(match &self.referer {
            Some(referer) => provider.with_referer(referer.clone()),
            None => provider,
        })
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            referer: Some(DEFAULT_REFERER.to_string()),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}
