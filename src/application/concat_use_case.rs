// ============================================================
// Layer 2 — ConcatUseCase
// ============================================================
// Runs one concatenation end to end:
//
//   Step 1: Load the raw record      (Layer 4 - data)
//   Step 2: Validate the pair        (Layer 4 - data)
//   Step 3: Build the NFA            (Layer 5 - construction)
//   Step 4: Encode, report, write    (Layer 6 - infra)
//
// The encoded result is handed to the caller's report
// callback before the output file is written, so it is shown
// even when the write then fails.
//
// Every step returns a typed ConcatError on failure and the
// run stops there; nothing is retried.
//
// Reference: Rust Book §9 (Propagating Errors with ?)

use std::path::PathBuf;

use crate::construction::concat::concatenate;
use crate::data::{loader::JsonFileSource, validator::validate_pair};
use crate::domain::automaton::{Automaton, Slot};
use crate::domain::traits::{AutomatonSink, AutomatonSource};
use crate::error::Result;
use crate::infra::writer::JsonFileSink;

// ─── File Defaults ────────────────────────────────────────────────────────────
/// The designated default input/output names used by `--default`
/// and as the fallback output for `--input`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDefaults {
    pub input:  PathBuf,
    pub output: PathBuf,
}

impl Default for FileDefaults {
    fn default() -> Self {
        Self {
            input:  PathBuf::from("input.json"),
            output: PathBuf::from("output.json"),
        }
    }
}

// ─── Run Configuration ────────────────────────────────────────────────────────
/// Resolved input and output files for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcatConfig {
    pub input:  PathBuf,
    pub output: PathBuf,
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct ConcatOutcome {
    /// The concatenation NFA
    pub nfa: Automaton,

    /// Exactly the text reported and written to the output file
    pub json: String,
}

// ─── ConcatUseCase ────────────────────────────────────────────────────────────
pub struct ConcatUseCase {
    config: ConcatConfig,
}

impl ConcatUseCase {
    pub fn new(config: ConcatConfig) -> Self {
        Self { config }
    }

    /// Read the configured input file and write the configured output file.
    /// `report` receives the encoded NFA before the file is written.
    pub fn execute(&self, report: impl FnOnce(&str)) -> Result<ConcatOutcome> {
        let source = JsonFileSource::new(&self.config.input);
        let sink   = JsonFileSink::new(&self.config.output);
        run(&source, &sink, report)
    }
}

/// Load, validate, concatenate and store, against any source and sink.
pub fn run(
    source: &impl AutomatonSource,
    sink:   &impl AutomatonSink,
    report: impl FnOnce(&str),
) -> Result<ConcatOutcome> {
    // ── Step 1: Load ──────────────────────────────────────────────────────────
    let record = source.load()?;

    // ── Step 2: Validate ──────────────────────────────────────────────────────
    let pair = validate_pair(&record)?;
    for slot in Slot::ALL {
        tracing::debug!("{}: {}", slot, pair.get(slot).summary());
    }

    // ── Step 3: Concatenate ───────────────────────────────────────────────────
    let nfa = concatenate(&pair.fa_a, &pair.fa_b);

    // ── Step 4: Encode, report, write ─────────────────────────────────────────
    let json = sink.encode(&nfa)?;
    report(&json);
    sink.write(&json)?;

    Ok(ConcatOutcome { nfa, json })
}
