// ============================================================
// Layer 4 — Automaton Loader
// ============================================================
// Reads the input JSON file into an untyped serde_json::Value.
//
// Two failure classes are surfaced here, before the validator
// ever runs:
//   - the file is missing or unreadable  → SourceUnavailable
//   - the content is not well-formed JSON → UnparsableSource
//
// The loader makes no claim about the record's shape; that is
// the validator's job (data/validator.rs).
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading a File)

use serde_json::Value;
use std::{fs, path::PathBuf};

use crate::domain::traits::AutomatonSource;
use crate::error::{ConcatError, Result};

/// Loads an automaton-pair record from a JSON file.
/// Implements the AutomatonSource trait from Layer 3.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AutomatonSource for JsonFileSource {
    fn load(&self) -> Result<Value> {
        let text = fs::read_to_string(&self.path).map_err(|source| {
            ConcatError::SourceUnavailable {
                path: self.path.clone(),
                source,
            }
        })?;

        tracing::debug!("Read {} bytes from '{}'", text.len(), self.path.display());

        serde_json::from_str(&text).map_err(|source| ConcatError::UnparsableSource {
            path: self.path.clone(),
            source,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_loads_json_record() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("input.json");
        fs::write(&path, r#"{"fa_a": 1, "fa_b": [2]}"#).unwrap();

        let value = JsonFileSource::new(&path).load().unwrap();
        assert_eq!(value, json!({ "fa_a": 1, "fa_b": [2] }));
    }

    #[test]
    fn test_preserves_key_order() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("input.json");
        fs::write(&path, r#"{"fa_b": 1, "fa_a": 2}"#).unwrap();

        let value = JsonFileSource::new(&path).load().unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["fa_b", "fa_a"]);
    }

    #[test]
    fn test_missing_file() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");

        let err = JsonFileSource::new(&path).load().unwrap_err();
        assert!(matches!(err, ConcatError::SourceUnavailable { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_unparsable_file() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ \"fa_a\": ").unwrap();

        let err = JsonFileSource::new(&path).load().unwrap_err();
        assert!(matches!(err, ConcatError::UnparsableSource { .. }));
    }
}
