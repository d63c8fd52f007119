//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the core logic and
//! infrastructure. Infrastructure implementations live in other crates.

use crate::{RasterPage, Recognition};

/// Trait for optical character recognition engines
///
/// Implemented by the infrastructure layer (metaform-reader). Engines are
/// expensive to build and are not assumed to be thread-safe, hence `&mut self`:
/// callers that share one engine must serialize access to it.
pub trait TextRecognizer {
    /// Error type for recognition operations
    type Error;

    /// Recognize all text regions on a single rendered page
    ///
    /// Results are returned in the engine's reading order.
    fn recognize(&mut self, page: &RasterPage) -> Result<Vec<Recognition>, Self::Error>;
}

/// Trait for the page engine of a paged document
///
/// Implemented by the infrastructure layer (metaform-reader). The same
/// engine decodes the embedded text layer and rasterizes pages for OCR.
pub trait PageRenderer {
    /// Error type for render operations
    type Error;

    /// Decode the text layer of every page, in page order
    ///
    /// A page without text yields an empty string.
    fn page_texts(&self, document: &[u8]) -> Result<Vec<String>, Self::Error>;

    /// Render every page of the document, in page order
    fn render_pages(&self, document: &[u8]) -> Result<Vec<RasterPage>, Self::Error>;
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (metaform-llm). The model
/// identifier and credential are bound when the provider is constructed.
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate text completion
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Name of the model answering the prompts
    fn model_name(&self) -> &str;
}
