//! Boundary tests: schemas engineered to land exactly on the thresholds

use metaform_schema::{analyze, Strategy};
use serde_json::{json, Map, Value};

/// A schema with `fields` flat string properties (depth 2) and a root enum
/// of `enums` members.
fn engineered_schema(fields: usize, enums: usize) -> Value {
    let mut properties = Map::new();
    for i in 0..fields {
        properties.insert(format!("field_{i}"), json!({"type": "string"}));
    }

    let mut schema = Map::new();
    schema.insert("type".to_string(), json!("object"));
    schema.insert("properties".to_string(), Value::Object(properties));
    if enums > 0 {
        let members: Vec<Value> = (0..enums).map(|i| json!(format!("v{i}"))).collect();
        schema.insert("enum".to_string(), Value::Array(members));
    }
    Value::Object(schema)
}

#[test]
fn test_score_99_99_is_direct() {
    let metrics = analyze(&engineered_schema(89, 99));
    assert_eq!(metrics.score, 99.99);
    assert_eq!(metrics.strategy(), Strategy::Direct);
}

#[test]
fn test_score_100_is_chunked() {
    let metrics = analyze(&engineered_schema(90, 0));
    assert_eq!(metrics.score, 100.0);
    assert_eq!(metrics.strategy(), Strategy::Chunked);
}

#[test]
fn test_score_199_99_is_chunked() {
    let metrics = analyze(&engineered_schema(189, 99));
    assert_eq!(metrics.score, 199.99);
    assert_eq!(metrics.strategy(), Strategy::Chunked);
}

#[test]
fn test_score_200_is_iterative() {
    let metrics = analyze(&engineered_schema(190, 0));
    assert_eq!(metrics.score, 200.0);
    assert_eq!(metrics.strategy(), Strategy::IterativeStitching);
}

#[test]
fn test_report_carries_strategy() {
    let report = analyze(&engineered_schema(190, 0)).report();
    assert_eq!(report.strategy, Strategy::IterativeStitching);
    assert_eq!(report.metrics.field_count, 190);
    assert_eq!(report.metrics.max_depth, 2);
}
