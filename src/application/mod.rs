// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers for one run: load, validate,
// concatenate, store. No printing happens here (that's
// Layer 1) and no JSON parsing (that's Layer 4).
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The concatenation workflow and its configuration
pub mod concat_use_case;
