//! Metaform Schema Analysis
//!
//! Estimates how hard a JSON Schema will be for a language model to fill in,
//! and picks a prompting strategy from that estimate.
//!
//! # Overview
//!
//! The analyzer walks an arbitrary JSON value (it does not need to be a valid
//! JSON Schema document) and counts:
//!
//! - **Fields**: entries of every `properties` object, at any depth
//! - **Depth**: the deepest nesting level reached, root = 1
//! - **Enums**: total length of every `enum` array
//!
//! These are folded into a score, `fields + 5 × depth + 0.01 × enums`
//! rounded to two decimals, which maps onto one of three [`Strategy`] values.
//!
//! # Example Usage
//!
//! ```
//! use metaform_schema::{analyze, Strategy};
//! use serde_json::json;
//!
//! let schema = json!({
//!     "properties": {
//!         "a": {"type": "string"},
//!         "b": {"type": "string"}
//!     }
//! });
//!
//! let metrics = analyze(&schema);
//! assert_eq!(metrics.field_count, 2);
//! assert_eq!(metrics.max_depth, 2);
//! assert_eq!(metrics.score, 12.0);
//! assert_eq!(metrics.strategy(), Strategy::Direct);
//! ```

#![warn(missing_docs)]

mod cache;
mod complexity;
mod node;
mod strategy;

pub use cache::{analyze_cached, ComplexityCache};
pub use complexity::{analyze, analyze_node, ComplexityMetrics, ComplexityReport};
pub use node::SchemaNode;
pub use strategy::Strategy;
