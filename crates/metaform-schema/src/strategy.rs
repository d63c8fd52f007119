//! Prompting strategy selection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scores below this are handled with a single direct prompt
pub const CHUNKED_THRESHOLD: f64 = 100.0;

/// Scores at or above this call for iterative stitching
pub const STITCHING_THRESHOLD: f64 = 200.0;

/// How the downstream prompt should be partitioned
///
/// Only the label is acted upon today; no component splits schemas or
/// stitches partial outputs back together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// One prompt carrying the full schema and text
    #[serde(rename = "Direct prompt, no schema splitting")]
    Direct,
    /// Schema or input split over a few model calls
    #[serde(rename = "Chunked schema or input, 2–3 LLM calls")]
    Chunked,
    /// Schema and input both chunked, outputs stitched iteratively
    #[serde(rename = "Chunk schema & input, iterative stitching")]
    IterativeStitching,
}

impl Strategy {
    /// Select the strategy for a complexity score
    ///
    /// Intervals are half-open: `[0, 100)`, `[100, 200)`, `[200, ∞)`.
    pub fn for_score(score: f64) -> Self {
        if score < CHUNKED_THRESHOLD {
            Strategy::Direct
        } else if score < STITCHING_THRESHOLD {
            Strategy::Chunked
        } else {
            Strategy::IterativeStitching
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Direct => "Direct prompt, no schema splitting",
            Strategy::Chunked => "Chunked schema or input, 2–3 LLM calls",
            Strategy::IterativeStitching => "Chunk schema & input, iterative stitching",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
