// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing finite
// automata. No file I/O and no JSON handling beyond serde
// derives live here.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Automaton, Transition, AutomatonPair and the slot names
pub mod automaton;

// Source/sink abstractions implemented by the outer layers
pub mod traits;
