//! Metaform Extractor
//!
//! Turns extracted document text into a JSON object shaped by a target
//! schema, with a language model doing the mapping.
//!
//! # Overview
//!
//! ```text
//! Schema → complexity analysis → Strategy ┐
//!                                         ├→ prompt → LLM → JSON carving
//! Text ───────────────────────────────────┘
//! ```
//!
//! The strategy only changes the prompt's wording. No schema splitting or
//! output stitching is performed, and the returned JSON is not validated
//! against the schema.
//!
//! # Example Usage
//!
//! ```
//! use metaform_extractor::{ExtractionRequest, JsonExtractor};
//! use metaform_llm::MockProvider;
//! use serde_json::json;
//!
//! let llm = MockProvider::new("Sure! {\"name\": \"Ada\"} Hope this helps.");
//! let extractor = JsonExtractor::new(llm);
//!
//! let result = extractor
//!     .extract(ExtractionRequest {
//!         schema: json!({"properties": {"name": {"type": "string"}}}),
//!         text: "Ada Lovelace wrote the first program.".to_string(),
//!     })
//!     .unwrap();
//!
//! assert_eq!(result.json, json!({"name": "Ada"}));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod parser;
mod prompt;
mod types;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::JsonExtractor;
pub use parser::extract_json_object;
pub use prompt::{PromptBuilder, BASE_INSTRUCTION};
pub use types::{ExtractionMetadata, ExtractionRequest, ExtractionResult};
