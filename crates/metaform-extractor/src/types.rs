//! Request and response types for extraction

use metaform_schema::ComplexityReport;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request to structure a text according to a schema
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    /// Target schema, already parsed
    pub schema: Value,

    /// Document text to structure
    pub text: String,
}

/// Result of an extraction operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Schema metrics and the strategy they selected
    pub report: ComplexityReport,

    /// Prompt sent to the model
    pub prompt: String,

    /// Model output before carving
    pub raw_output: String,

    /// Parsed JSON object
    pub json: Value,

    /// Metadata about the extraction
    pub metadata: ExtractionMetadata,
}

/// Metadata about an extraction operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// Name of the LLM model used
    pub model_name: String,

    /// Seconds since the Unix epoch when extraction finished
    pub timestamp: u64,

    /// Length of the input text in characters
    pub text_chars: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}
