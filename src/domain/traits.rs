// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer talks to the outside world only
// through these two traits:
//
//   AutomatonSource → produces one raw, untyped input record
//   AutomatonSink   → encodes one serialisable result record,
//                     then persists the encoded text
//
// Implementations:
//   - JsonFileSource (data/loader.rs) reads a JSON file
//   - JsonFileSink   (infra/writer.rs) writes pretty JSON
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

// ─── AutomatonSource ──────────────────────────────────────────────────────────
/// Anything that can supply a raw automaton-pair record.
///
/// The record is returned untyped; shape checking is the
/// validator's job, not the source's.
pub trait AutomatonSource {
    /// Read and parse the record.
    /// Fails with `SourceUnavailable` or `UnparsableSource`.
    fn load(&self) -> Result<Value>;
}

// ─── AutomatonSink ────────────────────────────────────────────────────────────
/// Anything that can persist a record (a single automaton or a pair).
///
/// Encoding and writing are separate so the caller can show the
/// encoded text before the write is attempted.
pub trait AutomatonSink {
    /// Encode `record` in the sink's format.
    /// Fails with `SerializationFailed`.
    fn encode<T: Serialize>(&self, record: &T) -> Result<String>;

    /// Persist text produced by `encode`.
    /// Fails with `SinkUnavailable`.
    fn write(&self, encoded: &str) -> Result<()>;
}
