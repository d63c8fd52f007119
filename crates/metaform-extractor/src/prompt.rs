//! Prompt templates, one per strategy

use metaform_schema::Strategy;
use serde_json::Value;

/// Opening instruction shared by every template
pub const BASE_INSTRUCTION: &str = "You are an expert system for structuring unstructured data. Your task is to convert the provided text into a structured JSON format that follows the exact schema below.";

const CHUNKED_NOTE: &str = "Due to size, you may only see part of the schema or input. Ensure strict adherence to the schema below.";

const ITERATIVE_NOTE: &str = "Schema is complex. Apply an iterative approach to structure the input across schema segments. Maintain exact property names.";

/// Builds the extraction prompt for a schema, a text and a strategy
pub struct PromptBuilder<'a> {
    schema: &'a Value,
    text: &'a str,
    strategy: Strategy,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(schema: &'a Value, text: &'a str, strategy: Strategy) -> Self {
        Self {
            schema,
            text,
            strategy,
        }
    }

    /// Build the complete prompt
    ///
    /// The schema is embedded pretty-printed with two-space indentation.
    pub fn build(&self) -> String {
        let schema = self.schema_json();
        let text = self.text;

        match self.strategy {
            Strategy::Direct => format!(
                "{BASE_INSTRUCTION}\n\nSchema:\n{schema}\n\nInput Text:\n{text}\n\nReturn ONLY the extracted JSON."
            ),
            Strategy::Chunked => format!(
                "{BASE_INSTRUCTION}\n\n{CHUNKED_NOTE}\n\nSchema (partial or full):\n{schema}\n\nInput Text:\n{text}\n\nReturn JSON matching the schema."
            ),
            Strategy::IterativeStitching => format!(
                "{BASE_INSTRUCTION}\n\n{ITERATIVE_NOTE}\n\nSchema (may be partial):\n{schema}\n\nInput Text (chunk):\n{text}\n\nReturn valid JSON output."
            ),
        }
    }

    fn schema_json(&self) -> String {
        // Value serialization is infallible
        serde_json::to_string_pretty(self.schema).unwrap_or_else(|_| self.schema.to_string())
    }
}
