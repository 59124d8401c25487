// ============================================================
// Layer 5 — Automaton Constructions
// ============================================================
// Pure functions from validated automata to new automata.
// No I/O happens in this layer.

/// Concatenation L(A)·L(B) via epsilon links
pub mod concat;
