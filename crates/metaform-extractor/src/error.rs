//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// The model output contains no brace-delimited object
    #[error("No valid JSON object found in the response.")]
    NoJsonObject {
        /// Model output as received
        raw_output: String,
    },

    /// The carved object is not valid JSON
    #[error("Failed to parse JSON: {message}")]
    JsonParse {
        /// Parser message
        message: String,
        /// Model output as received
        raw_output: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractorError {
    /// Model output that could not be turned into JSON, if the model answered
    pub fn raw_output(&self) -> Option<&str> {
        match self {
            ExtractorError::NoJsonObject { raw_output }
            | ExtractorError::JsonParse { raw_output, .. } => Some(raw_output),
            ExtractorError::Llm(_) | ExtractorError::Config(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ExtractorError::NoJsonObject {
            raw_output: "nothing".to_string(),
        };
        assert_eq!(err.to_string(), "No valid JSON object found in the response.");

        let err = ExtractorError::JsonParse {
            message: "trailing comma".to_string(),
            raw_output: "{a,}".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to parse JSON: trailing comma");
    }

    #[test]
    fn test_raw_output() {
        let err = ExtractorError::JsonParse {
            message: "x".to_string(),
            raw_output: "{bad}".to_string(),
        };
        assert_eq!(err.raw_output(), Some("{bad}"));
        assert_eq!(ExtractorError::Llm("down".to_string()).raw_output(), None);
    }
}
