// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Output persistence:
//
//   writer.rs — JSON output sink
//               Encodes the resulting automaton with a
//               4-space pretty printer and writes it to
//               the configured output file.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling)

/// Pretty JSON writer for result records
pub mod writer;
