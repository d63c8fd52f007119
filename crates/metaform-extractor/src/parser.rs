//! Carve a JSON object out of free-form model output

use crate::error::ExtractorError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

/// First `{` through last `}`, across newlines
static OBJECT_PATTERN: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| Regex::new(r"(?s)\{.*\}"));

/// Locate and parse the brace-delimited object in `response`
///
/// The match is greedy, so prose after the object is ignored but a second
/// object makes the carved span invalid JSON.
pub fn extract_json_object(response: &str) -> Result<Value, ExtractorError> {
    let pattern = OBJECT_PATTERN
        .as_ref()
        .map_err(|e| ExtractorError::Config(format!("object pattern: {}", e)))?;

    let Some(found) = pattern.find(response) else {
        return Err(ExtractorError::NoJsonObject {
            raw_output: response.to_string(),
        });
    };

    debug!("Carved {} chars of JSON from model output", found.len());
    serde_json::from_str(found.as_str()).map_err(|e| ExtractorError::JsonParse {
        message: e.to_string(),
        raw_output: response.to_string(),
    })
}
