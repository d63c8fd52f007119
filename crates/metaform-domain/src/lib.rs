//! Metaform Domain Layer
//!
//! This crate contains the value types and trait seams shared by every other
//! Metaform crate. It has ZERO external dependencies and never performs I/O on
//! its own; implementations of the traits live in the infrastructure crates.
//!
//! ## Key Concepts
//!
//! - **RasterPage**: A rendered document page, RGB8, ready for recognition
//! - **Recognition**: One OCR result (bounding box, text, confidence)
//! - **TextRecognizer**: An OCR engine turning a page into recognitions
//! - **PageRenderer**: Rasterizes every page of a paged document
//! - **LlmProvider**: Opaque language-model call, prompt in and raw text out
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Trait definitions for all external interactions
//! - Infrastructure implementations live in `metaform-reader` and `metaform-llm`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ocr;
pub mod traits;

// Re-exports for convenience
pub use ocr::{BoundingBox, RasterPage, Recognition};
pub use traits::{LlmProvider, PageRenderer, TextRecognizer};
