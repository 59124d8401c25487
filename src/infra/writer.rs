// ============================================================
// Layer 6 — JSON Output Writer
// ============================================================
// Serialises a record (a single automaton, or a pair) as
// pretty-printed JSON and writes it to the output file.
//
// Format:
//   - 4-space indentation
//   - keys in struct declaration order
//   - transitions as ["from", "to", "symbol"] arrays
//
// Failure classes:
//   - encoding fails           → SerializationFailed
//   - the file cannot be written → SinkUnavailable
//
// The file is created if missing and truncated if present.
//
// Reference: serde_json::ser::PrettyFormatter documentation
//            Rust Book §12 (Writing to Files)

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{fs, path::PathBuf};

use crate::domain::traits::AutomatonSink;
use crate::error::{ConcatError, Result};

const INDENT: &[u8] = b"    ";

/// Writes records as pretty JSON to a file.
/// Implements the AutomatonSink trait from Layer 3.
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Encode `record` as JSON with 4-space indentation.
pub fn to_pretty_json<T: Serialize>(record: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    record
        .serialize(&mut ser)
        .map_err(ConcatError::SerializationFailed)?;

    // serde_json only ever emits valid UTF-8
    String::from_utf8(buf).map_err(|e| {
        ConcatError::SerializationFailed(serde::ser::Error::custom(e.to_string()))
    })
}

impl AutomatonSink for JsonFileSink {
    fn encode<T: Serialize>(&self, record: &T) -> Result<String> {
        to_pretty_json(record)
    }

    fn write(&self, encoded: &str) -> Result<()> {
        fs::write(&self.path, encoded).map_err(|source| ConcatError::SinkUnavailable {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!("Wrote {} bytes to '{}'", encoded.len(), self.path.display());
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::automaton::{Automaton, Transition};
    use serde::ser::Error as _;
    use tempfile::TempDir;

    fn tiny() -> Automaton {
        Automaton {
            states:           vec!["q0".into()],
            alphabet:         vec!["a".into()],
            transitions:      vec![Transition::new("q0", "q0", "a")],
            start_state:      "q0".into(),
            accepting_states: vec!["q0".into()],
        }
    }

    /// A value whose Serialize impl always fails.
    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
            Err(S::Error::custom("not representable"))
        }
    }

    #[test]
    fn test_uses_four_space_indent() {
        let json = to_pretty_json(&tiny()).unwrap();
        assert!(json.starts_with("{\n    \"states\": [\n        \"q0\"\n    ],"));
    }

    #[test]
    fn test_writes_encoded_text() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("output.json");
        let sink = JsonFileSink::new(&path);

        let json = sink.encode(&tiny()).unwrap();
        sink.write(&json).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), json);

        let back: Automaton = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tiny());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("output.json");
        fs::write(&path, "stale content that is much longer than nothing").unwrap();

        let sink = JsonFileSink::new(&path);
        sink.write(&sink.encode(&tiny()).unwrap()).unwrap();
        assert!(fs::read_to_string(&path).unwrap().starts_with('{'));
    }

    #[test]
    fn test_unwritable_path() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("missing_dir").join("output.json");

        let err = JsonFileSink::new(&path).write("{}").unwrap_err();
        assert!(matches!(err, ConcatError::SinkUnavailable { .. }));
    }

    #[test]
    fn test_encoding_does_not_touch_the_file() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("output.json");

        JsonFileSink::new(&path).encode(&tiny()).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_serialisation_failure() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("output.json");

        let err = JsonFileSink::new(&path).encode(&Unencodable).unwrap_err();
        assert!(matches!(err, ConcatError::SerializationFailed(_)));
        assert!(!path.exists());
    }
}
