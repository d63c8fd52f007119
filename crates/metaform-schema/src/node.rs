//! Closed JSON value model used by the traversal

use serde_json::Value;
use std::collections::BTreeMap;

/// A JSON value, independent of any particular JSON library
///
/// Numbers keep only their `f64` reading since the traversal never looks at
/// scalar contents.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// `null`
    Null,
    /// `true` / `false`
    Bool(bool),
    /// Any JSON number
    Number(f64),
    /// A JSON string
    String(String),
    /// A JSON array
    Array(Vec<SchemaNode>),
    /// A JSON object
    Object(BTreeMap<String, SchemaNode>),
}

impl SchemaNode {
    /// Parse a node straight from JSON text
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from(&value))
    }

    /// Check if the node is an object or an array
    pub fn is_container(&self) -> bool {
        matches!(self, SchemaNode::Array(_) | SchemaNode::Object(_))
    }
}

impl From<&Value> for SchemaNode {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => SchemaNode::Null,
            Value::Bool(b) => SchemaNode::Bool(*b),
            Value::Number(n) => SchemaNode::Number(n.as_f64().unwrap_or(0.0)),
            Value::String(s) => SchemaNode::String(s.clone()),
            Value::Array(items) => SchemaNode::Array(items.iter().map(SchemaNode::from).collect()),
            Value::Object(map) => SchemaNode::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), SchemaNode::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for SchemaNode {
    fn from(value: Value) -> Self {
        SchemaNode::from(&value)
    }
}
