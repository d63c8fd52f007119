//! Process-wide memoization of complexity metrics
//!
//! Entries are keyed by the schema's content, not by reference, so a fresh
//! parse of an unchanged schema hits the cache. There is no eviction.

use crate::complexity::{analyze, ComplexityMetrics};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

static GLOBAL_CACHE: Lazy<ComplexityCache> = Lazy::new(ComplexityCache::new);

/// Content-keyed cache of [`ComplexityMetrics`]
#[derive(Debug, Default)]
pub struct ComplexityCache {
    entries: Mutex<HashMap<String, ComplexityMetrics>>,
}

impl ComplexityCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// The cache shared by the whole process
    pub fn global() -> &'static ComplexityCache {
        &GLOBAL_CACHE
    }

    /// Analyze a schema, reusing the result for identical content
    pub fn analyze(&self, schema: &Value) -> ComplexityMetrics {
        let key = cache_key(schema);

        if let Some(hit) = self.lock().get(&key) {
            debug!("Schema complexity cache hit ({} key bytes)", key.len());
            return *hit;
        }

        // Computed outside the lock; a racing insert yields the same value
        let metrics = analyze(schema);
        debug!(
            "Schema complexity cache miss: fields={}, depth={}, enums={}",
            metrics.field_count, metrics.max_depth, metrics.enum_count
        );
        self.lock().insert(key, metrics);
        metrics
    }

    /// Number of distinct schemas analyzed so far
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, ComplexityMetrics>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Analyze through the process-wide cache
pub fn analyze_cached(schema: &Value) -> ComplexityMetrics {
    ComplexityCache::global().analyze(schema)
}

/// Canonical text of the schema
///
/// `serde_json` objects iterate in sorted key order, so two schemas that
/// differ only in key order share a key.
fn cache_key(schema: &Value) -> String {
    schema.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cache_hits_on_equal_content() {
        let cache = ComplexityCache::new();
        assert!(cache.is_empty());

        let first = json!({"properties": {"a": {}, "b": {}}});
        let second: Value = serde_json::from_str(r#"{"properties": {"a": {}, "b": {}}}"#).unwrap();

        let m1 = cache.analyze(&first);
        let m2 = cache.analyze(&second);

        assert_eq!(m1, m2);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_keeps_distinct_schemas_apart() {
        let cache = ComplexityCache::new();
        let a = cache.analyze(&json!({"enum": [1, 2]}));
        let b = cache.analyze(&json!({"enum": [1, 2, 3]}));

        assert_ne!(a, b);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_cached_matches_uncached() {
        let schema = json!({"properties": {"x": {"properties": {"y": {"enum": ["a"]}}}}});
        assert_eq!(analyze_cached(&schema), analyze(&schema));
        assert_eq!(analyze_cached(&schema), analyze(&schema));
    }
}
