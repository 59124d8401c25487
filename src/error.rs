//! Error types for loading, validating and writing automata.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::automaton::Slot;

/// Result type alias using the crate's top-level error.
pub type Result<T> = std::result::Result<T, ConcatError>;

/// A schema violation found by the validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Top-level record is not exactly `{fa_a, fa_b}`.
    #[error("the input must contain exactly the automata 'fa_a' and 'fa_b', in that order")]
    MissingAutomataPair,

    /// An automaton record does not have exactly the five schema fields.
    #[error(
        "automaton '{0}' must have exactly the fields \
         states, alphabet, transitions, start_state, accepting_states (in that order)"
    )]
    MalformedFields(Slot),

    /// A field holds a value of the wrong shape.
    #[error("automaton '{automaton}': field '{field}' {expected}")]
    InvalidFieldType {
        automaton: Slot,
        field:     &'static str,
        expected:  &'static str,
    },

    /// A transition entry is not a sequence of three strings.
    #[error("automaton '{automaton}': invalid transitions: {defect}")]
    InvalidTransition {
        automaton: Slot,
        defect:    TransitionDefect,
    },
}

impl ValidationError {
    /// The automaton the error refers to, if it is specific to one.
    pub fn automaton(&self) -> Option<Slot> {
        match self {
            ValidationError::MissingAutomataPair => None,
            ValidationError::MalformedFields(slot) => Some(*slot),
            ValidationError::InvalidFieldType { automaton, .. }
            | ValidationError::InvalidTransition { automaton, .. } => Some(*automaton),
        }
    }
}

/// What is wrong with a `transitions` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionDefect {
    /// The field itself is not a sequence.
    NotASequence,
    /// Entry `index` is not a sequence.
    EntryNotASequence { index: usize },
    /// Entry `index` has `len` members instead of three.
    WrongArity { index: usize, len: usize },
    /// Member `position` of entry `index` is not a string.
    NonStringMember { index: usize, position: usize },
}

impl fmt::Display for TransitionDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionDefect::NotASequence => {
                write!(f, "'transitions' must be a list")
            }
            TransitionDefect::EntryNotASequence { index } => {
                write!(f, "entry {index} must be a list of [from, to, symbol]")
            }
            TransitionDefect::WrongArity { index, len } => {
                write!(f, "entry {index} has {len} elements, expected 3")
            }
            TransitionDefect::NonStringMember { index, position } => {
                write!(f, "entry {index}, element {position} must be a string")
            }
        }
    }
}

/// Any failure of one concatenation run.
#[derive(Error, Debug)]
pub enum ConcatError {
    /// The designated input file does not exist or cannot be opened.
    #[error("the file '{}' does not exist or cannot be read", .path.display())]
    SourceUnavailable {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input exists but is not well-formed JSON.
    #[error("the file '{}' could not be parsed as JSON", .path.display())]
    UnparsableSource {
        path:   PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The input parsed but does not match the automaton schema.
    #[error("the finite automata are not in the proper format: {0}")]
    Validation(#[from] ValidationError),

    /// The result could not be encoded as JSON.
    #[error("unable to serialise the resulting NFA to JSON")]
    SerializationFailed(#[source] serde_json::Error),

    /// The output file could not be written.
    #[error("cannot write output to '{}'", .path.display())]
    SinkUnavailable {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },
}
