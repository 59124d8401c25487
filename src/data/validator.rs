// ============================================================
// Layer 4 — Automaton Pair Validator
// ============================================================
// Checks an untyped JSON record against the automaton-pair
// schema and, on success, lifts it into typed domain values.
//
// Checks are applied in this order, stopping at the first
// failure:
//
//   1. Top-level keys are exactly [fa_a, fa_b]
//   2. Each automaton's keys are exactly
//      [states, alphabet, transitions, start_state, accepting_states]
//   3. Per-field types, fa_a first, then fa_b:
//        states / alphabet / accepting_states → non-empty list of strings
//        start_state                          → string
//        transitions                          → list of [str, str, str]
//
// Key order matters in steps 1 and 2, which is why serde_json
// is built with `preserve_order`.
//
// Nothing is repaired: duplicate states stay duplicated, and
// membership of start/accepting states in `states` is not
// checked.
//
// Reference: serde_json::Value documentation
//            Rust Book §9 (Recoverable Errors with Result)

use serde_json::{Map, Value};

use crate::domain::automaton::{
    Automaton, AutomatonPair, Slot, Transition, AUTOMATON_FIELDS, PAIR_SLOTS,
};
use crate::error::{TransitionDefect, ValidationError};

const NON_EMPTY_STRINGS: &str = "must be a non-empty list of strings";
const A_STRING: &str = "must be a string";

/// Validate a raw record and return the typed automaton pair.
pub fn validate_pair(record: &Value) -> Result<AutomatonPair, ValidationError> {
    let result = check_pair(record);

    match &result {
        Ok(pair) => tracing::debug!(
            "Validation passed: fa_a has {} states, fa_b has {} states",
            pair.fa_a.states.len(),
            pair.fa_b.states.len()
        ),
        Err(e) => tracing::warn!(automaton = ?e.automaton(), "Validation failed: {}", e),
    }

    result
}

fn check_pair(record: &Value) -> Result<AutomatonPair, ValidationError> {
    // ── Step 1: top-level shape ───────────────────────────────────────────────
    let top = record
        .as_object()
        .filter(|obj| has_exact_keys(obj, &PAIR_SLOTS))
        .ok_or(ValidationError::MissingAutomataPair)?;

    // ── Step 2: field shape of both automata ──────────────────────────────────
    // Both are checked before any field types, so a malformed fa_b is
    // reported ahead of a type error in fa_a.
    let a_fields = automaton_fields(top, Slot::A)?;
    let b_fields = automaton_fields(top, Slot::B)?;

    // ── Step 3: field types ───────────────────────────────────────────────────
    Ok(AutomatonPair {
        fa_a: check_automaton(Slot::A, a_fields)?,
        fa_b: check_automaton(Slot::B, b_fields)?,
    })
}

fn automaton_fields(
    top:  &Map<String, Value>,
    slot: Slot,
) -> Result<&Map<String, Value>, ValidationError> {
    top.get(slot.key())
        .and_then(Value::as_object)
        .filter(|obj| has_exact_keys(obj, &AUTOMATON_FIELDS))
        .ok_or(ValidationError::MalformedFields(slot))
}

/// True if the object's keys are exactly `expected`, in order.
fn has_exact_keys(obj: &Map<String, Value>, expected: &[&str]) -> bool {
    obj.len() == expected.len() && obj.keys().zip(expected).all(|(k, e)| k.as_str() == *e)
}

/// Type-check the five fields of one automaton.
/// The caller has already confirmed that exactly these keys are present.
fn check_automaton(slot: Slot, fields: &Map<String, Value>) -> Result<Automaton, ValidationError> {
    let states           = string_list(slot, "states", &fields["states"])?;
    let alphabet         = string_list(slot, "alphabet", &fields["alphabet"])?;
    let transitions      = transition_list(slot, &fields["transitions"])?;
    let start_state      = string(slot, "start_state", &fields["start_state"])?;
    let accepting_states = string_list(slot, "accepting_states", &fields["accepting_states"])?;

    Ok(Automaton {
        states,
        alphabet,
        transitions,
        start_state,
        accepting_states,
    })
}

fn string(slot: Slot, field: &'static str, value: &Value) -> Result<String, ValidationError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or(ValidationError::InvalidFieldType {
            automaton: slot,
            field,
            expected: A_STRING,
        })
}

/// A non-empty list whose every element is a string.
fn string_list(
    slot:  Slot,
    field: &'static str,
    value: &Value,
) -> Result<Vec<String>, ValidationError> {
    let invalid = || ValidationError::InvalidFieldType {
        automaton: slot,
        field,
        expected: NON_EMPTY_STRINGS,
    };

    let items = value
        .as_array()
        .filter(|items| !items.is_empty())
        .ok_or_else(invalid)?;

    items
        .iter()
        .map(|item| item.as_str().map(str::to_owned).ok_or_else(invalid))
        .collect()
}

/// A (possibly empty) list of three-string lists.
fn transition_list(slot: Slot, value: &Value) -> Result<Vec<Transition>, ValidationError> {
    let invalid = |defect| ValidationError::InvalidTransition {
        automaton: slot,
        defect,
    };

    let entries = value
        .as_array()
        .ok_or_else(|| invalid(TransitionDefect::NotASequence))?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let members = entry
                .as_array()
                .ok_or_else(|| invalid(TransitionDefect::EntryNotASequence { index }))?;

            let [from, to, symbol] = members.as_slice() else {
                return Err(invalid(TransitionDefect::WrongArity {
                    index,
                    len: members.len(),
                }));
            };

            let member = |position: usize, v: &Value| {
                v.as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| invalid(TransitionDefect::NonStringMember { index, position }))
            };

            Ok(Transition(member(0, from)?, member(1, to)?, member(2, symbol)?))
        })
        .collect()
}
