// ============================================================
// Layer 4 — Input Pipeline
// ============================================================
// Everything between the input file and typed automata:
//
//   input.json
//       │
//       ▼
//   JsonFileSource  → reads the file, parses untyped JSON
//       │
//       ▼
//   validate_pair   → checks the schema, lifts to AutomatonPair
//
// Reference: Rust Book §7 (Modules)

/// Reads a JSON file into an untyped record
pub mod loader;

/// Schema checks for an automaton-pair record
pub mod validator;
