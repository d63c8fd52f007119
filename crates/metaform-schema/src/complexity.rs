//! Structural traversal and complexity scoring

use crate::node::SchemaNode;
use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Weight of one nesting level in the score
const DEPTH_WEIGHT: f64 = 5.0;

/// Weight of one enumerated value in the score
const ENUM_WEIGHT: f64 = 0.01;

/// Structural metrics of a schema
///
/// Derived deterministically from the schema; two structurally identical
/// schemas always produce equal metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexityMetrics {
    /// Total number of `properties` entries, at any depth
    pub field_count: usize,

    /// Deepest nesting level reached, the root being 1
    pub max_depth: usize,

    /// Total length of all `enum` arrays
    pub enum_count: usize,

    /// `field_count + 5 × max_depth + 0.01 × enum_count`, two decimals
    pub score: f64,
}

impl ComplexityMetrics {
    /// Build metrics from raw counts, computing the score
    pub fn from_counts(field_count: usize, max_depth: usize, enum_count: usize) -> Self {
        let raw = field_count as f64
            + DEPTH_WEIGHT * max_depth as f64
            + ENUM_WEIGHT * enum_count as f64;

        Self {
            field_count,
            max_depth,
            enum_count,
            score: round_hundredths(raw),
        }
    }

    /// Strategy recommended for this score
    pub fn strategy(&self) -> Strategy {
        Strategy::for_score(self.score)
    }

    /// Metrics bundled with their strategy
    pub fn report(&self) -> ComplexityReport {
        ComplexityReport {
            metrics: *self,
            strategy: self.strategy(),
        }
    }
}

/// Metrics plus the derived strategy, ready to serialize for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexityReport {
    /// The structural metrics
    #[serde(flatten)]
    pub metrics: ComplexityMetrics,

    /// Recommended strategy
    pub strategy: Strategy,
}

/// Analyze a parsed JSON value
///
/// Never fails: any JSON shape is accepted and unexpected shapes simply
/// contribute nothing.
pub fn analyze(schema: &Value) -> ComplexityMetrics {
    analyze_node(&SchemaNode::from(schema))
}

/// Analyze a [`SchemaNode`] tree
pub fn analyze_node(schema: &SchemaNode) -> ComplexityMetrics {
    let tally = traverse(schema, 1);
    ComplexityMetrics::from_counts(tally.fields, tally.depth, tally.enums)
}

/// Running accumulators threaded through the traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tally {
    fields: usize,
    depth: usize,
    enums: usize,
}

impl Tally {
    fn at_level(level: usize) -> Self {
        Self {
            fields: 0,
            depth: level,
            enums: 0,
        }
    }

    fn absorb(&mut self, child: Tally) {
        self.fields += child.fields;
        self.enums += child.enums;
        self.depth = self.depth.max(child.depth);
    }
}

fn traverse(node: &SchemaNode, level: usize) -> Tally {
    let mut tally = Tally::at_level(level);

    match node {
        SchemaNode::Object(entries) => {
            for (key, value) in entries {
                match (key.as_str(), value) {
                    // Terminal: enum members are counted, never walked
                    ("enum", SchemaNode::Array(members)) => {
                        tally.enums += members.len();
                    }
                    ("properties", SchemaNode::Object(properties)) => {
                        tally.fields += properties.len();
                        for property in properties.values() {
                            tally.absorb(traverse(property, level + 1));
                        }
                    }
                    (_, value) if value.is_container() => {
                        tally.absorb(traverse(value, level + 1));
                    }
                    _ => {}
                }
            }
        }
        SchemaNode::Array(items) => {
            for item in items {
                tally.absorb(traverse(item, level + 1));
            }
        }
        _ => {}
    }

    tally
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}


#[cfg(test)]
mod proptests {
    use super::analyze;
    use crate::strategy::{self as plan, CHUNKED_THRESHOLD, STITCHING_THRESHOLD};
    use proptest::prelude::*;
    use serde_json::Value;

    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::from),
            "[a-z]{0,8}".prop_map(Value::String),
        ];
        leaf.prop_recursive(5, 96, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::btree_map(
                    prop_oneof![
                        Just("properties".to_string()),
                        Just("enum".to_string()),
                        "[a-z]{1,6}",
                    ],
                    inner,
                    0..6,
                )
                .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        /// Property: depth is at least one, whatever the input
        #[test]
        fn test_depth_at_least_one(value in arb_json()) {
            prop_assert!(analyze(&value).max_depth >= 1);
        }

        /// Property: the score is the rounded weighted sum of the counts
        #[test]
        fn test_score_formula(value in arb_json()) {
            let m = analyze(&value);
            let expected = m.field_count as f64 + 5.0 * m.max_depth as f64 + 0.01 * m.enum_count as f64;
            prop_assert!((m.score - expected).abs() < 0.006);
        }

        /// Property: analyzing a deep copy yields identical metrics
        #[test]
        fn test_idempotent_on_copies(value in arb_json()) {
            let copy: Value = serde_json::from_str(&value.to_string()).unwrap();
            prop_assert_eq!(analyze(&value), analyze(&copy));
        }

        /// Property: the strategy follows the half-open score intervals
        #[test]
        fn test_strategy_agrees_with_thresholds(value in arb_json()) {
            let m = analyze(&value);
            let expected = if m.score < CHUNKED_THRESHOLD {
                plan::Strategy::Direct
            } else if m.score < STITCHING_THRESHOLD {
                plan::Strategy::Chunked
            } else {
                plan::Strategy::IterativeStitching
            };
            prop_assert_eq!(m.strategy(), expected);
        }
    }
}
