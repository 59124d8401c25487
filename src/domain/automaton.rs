// ============================================================
// Layer 3 — Automaton Domain Types
// ============================================================
// A finite automaton described purely by its parts:
//
//   states            — ordered list of state names
//   alphabet          — input symbols (set semantics)
//   transitions       — ordered list of (from, to, symbol)
//   start_state       — the initial state
//   accepting_states  — ordered list of final states
//
// DFAs and NFAs share this shape. Nothing here checks that
// the start or accepting states are actually members of
// `states`, and names are not assumed to be unique: a state
// list is a sequence, not a set.
//
// On disk a transition is a three-element JSON array
// `["q0", "q1", "a"]`, so Transition is a tuple struct and
// serde writes it as an array.
//
// Reference: Rust Book §5 (Structs), §6 (Enums)

use serde::{Deserialize, Serialize};
use std::fmt;

/// The reserved symbol for an epsilon (empty) move.
pub const EPSILON: &str = "&";

/// Field names of an automaton record, in schema order.
pub const AUTOMATON_FIELDS: [&str; 5] = [
    "states",
    "alphabet",
    "transitions",
    "start_state",
    "accepting_states",
];

/// Slot names of an automaton-pair record, in schema order.
pub const PAIR_SLOTS: [&str; 2] = ["fa_a", "fa_b"];

// ─── Transition ───────────────────────────────────────────────────────────────
/// One edge of the transition relation: (from, to, symbol).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition(pub String, pub String, pub String);

impl Transition {
    pub fn new(
        from:   impl Into<String>,
        to:     impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        Self(from.into(), to.into(), symbol.into())
    }

    /// An empty move from `from` to `to`.
    pub fn epsilon(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new(from, to, EPSILON)
    }

    pub fn is_epsilon(&self) -> bool {
        self.2 == EPSILON
    }
}

// ─── Automaton ────────────────────────────────────────────────────────────────
/// A finite automaton (DFA or NFA) over string-named states.
///
/// Field declaration order is the serialised key order, which
/// matches the order the validator requires on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Automaton {
    pub states: Vec<String>,

    /// Kept as read on input; the concatenator emits it
    /// deduplicated and sorted.
    pub alphabet: Vec<String>,

    pub transitions: Vec<Transition>,

    pub start_state: String,

    pub accepting_states: Vec<String>,
}

impl Automaton {
    /// Short one-line description used in log output.
    pub fn summary(&self) -> String {
        let epsilon = self.transitions.iter().filter(|t| t.is_epsilon()).count();
        format!(
            "{} states, {} symbols, {} transitions ({} epsilon), start '{}', {} accepting",
            self.states.len(),
            self.alphabet.len(),
            self.transitions.len(),
            epsilon,
            self.start_state,
            self.accepting_states.len(),
        )
    }
}

// ─── AutomatonPair ────────────────────────────────────────────────────────────
/// The two operands of a concatenation, as read from one input record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutomatonPair {
    pub fa_a: Automaton,
    pub fa_b: Automaton,
}

impl AutomatonPair {
    pub fn get(&self, slot: Slot) -> &Automaton {
        match slot {
            Slot::A => &self.fa_a,
            Slot::B => &self.fa_b,
        }
    }
}

// ─── Slot ─────────────────────────────────────────────────────────────────────
/// Which automaton of the pair an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    A,
    B,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::A, Slot::B];

    /// The record key for this slot ("fa_a" / "fa_b").
    pub fn key(self) -> &'static str {
        match self {
            Slot::A => PAIR_SLOTS[0],
            Slot::B => PAIR_SLOTS[1],
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transition_serialises_as_array() {
        let t = Transition::new("q0", "q1", "a");
        assert_eq!(serde_json::to_value(&t).unwrap(), json!(["q0", "q1", "a"]));
    }

    #[test]
    fn test_epsilon_transition() {
        let t = Transition::epsilon("q1", "p0");
        assert!(t.is_epsilon());
        assert_eq!(t, Transition::new("q1", "p0", "&"));
        assert!(!Transition::new("q0", "q1", "a").is_epsilon());
    }

    #[test]
    fn test_automaton_field_order_on_output() {
        let fa = Automaton {
            states:           vec!["q0".into()],
            alphabet:         vec!["a".into()],
            transitions:      vec![],
            start_state:      "q0".into(),
            accepting_states: vec!["q0".into()],
        };
        let value = serde_json::to_value(&fa).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, AUTOMATON_FIELDS);
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(Slot::A.to_string(), "fa_a");
        assert_eq!(Slot::B.to_string(), "fa_b");
    }
}
