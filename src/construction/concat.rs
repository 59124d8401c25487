// ============================================================
// Layer 5 — Concatenation Construction
// ============================================================
// Builds the NFA accepting L(A)·L(B) from two automata:
//
//   Q  = QA ++ QB                    (sequence, no dedup)
//   Σ  = ΣA ∪ ΣB                     (set, emitted sorted)
//   δ  = δA ++ δB ++ { (f, q0B, &) | f ∈ FA }
//   q0 = q0A
//   F  = FB
//
// Every accepting state of A gets an epsilon move to B's
// start state, appended in the order FA is listed. The
// epsilon marker `&` is never added to the alphabet.
//
// The construction is purely structural: no renaming, no
// pruning of unreachable states, no membership checks. A
// state name used by both A and B appears twice in Q.
//
// Reference: Sipser, Introduction to the Theory of
//            Computation, Theorem 1.47

use std::collections::BTreeSet;

use crate::domain::automaton::{Automaton, Transition};

/// Concatenate two validated automata into a new NFA.
pub fn concatenate(a: &Automaton, b: &Automaton) -> Automaton {
    let states: Vec<String> = a.states.iter().chain(&b.states).cloned().collect();

    // BTreeSet gives a deterministic, sorted alphabet
    let alphabet: Vec<String> = a
        .alphabet
        .iter()
        .chain(&b.alphabet)
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let linking = a
        .accepting_states
        .iter()
        .map(|f| Transition::epsilon(f.as_str(), b.start_state.as_str()));

    let transitions: Vec<Transition> = a
        .transitions
        .iter()
        .chain(&b.transitions)
        .cloned()
        .chain(linking)
        .collect();

    let nfa = Automaton {
        states,
        alphabet,
        transitions,
        start_state:      a.start_state.clone(),
        accepting_states: b.accepting_states.clone(),
    };

    tracing::debug!("Concatenated NFA: {}", nfa.summary());
    nfa
}
