//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Document reading error
    #[error("Reader error: {0}")]
    Reader(#[from] metaform_reader::ReaderError),

    /// Extraction error
    #[error("Error during extraction: {0}")]
    Extractor(#[from] metaform_extractor::ExtractorError),

    /// Model provider error
    #[error("LLM error: {0}")]
    Llm(#[from] metaform_llm::LlmError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No API key given
    #[error("Please provide your OpenRouter API key (--api-key or OPENROUTER_API_KEY) to proceed.")]
    MissingApiKey,
}
