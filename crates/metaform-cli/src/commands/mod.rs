//! Command implementations.

pub mod analyze;
pub mod config;
pub mod extract;
pub mod text;

pub use self::analyze::execute_analyze;
pub use self::config::execute_config;
pub use self::extract::execute_extract;
pub use self::text::execute_text;

use crate::error::{CliError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// File written by `extract --output` when no name is given.
pub const DEFAULT_OUTPUT_FILE: &str = "extracted_output.json";

/// Read and parse a JSON schema file.
pub(crate) fn load_schema(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| CliError::InvalidInput(format!("{} is not valid JSON: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_schema() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("schema.json");
        fs::write(&path, r#"{"properties": {"a": {}}}"#).unwrap();

        let schema = load_schema(&path).unwrap();
        assert!(schema["properties"]["a"].is_object());
    }

    #[test]
    fn test_load_schema_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("schema.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(load_schema(&path), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_load_schema_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load_schema(&dir.path().join("absent.json")),
            Err(CliError::Io(_))
        ));
    }
}
