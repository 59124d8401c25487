// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses the command line with clap, hands the resolved
// files to Layer 2 and prints the result.
//
//   fa-concat -d
//   fa-concat -i pair.json
//   fa-concat -i pair.json -o nfa.json
//   fa-concat -h
//
// With no arguments, or without -d / -i, clap prints the
// usage and exits with status 2. --help exits with 0.
//
// Reference: Rust Book §12 (CLI programs)

pub mod args;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};

use crate::application::concat_use_case::{ConcatUseCase, FileDefaults};
use args::FileArgs;

#[derive(Parser, Debug)]
#[command(
    name = "fa-concat",
    version,
    about = "Creates an NFA for the concatenation of the languages of two finite automata.",
    arg_required_else_help = true,
    group(ArgGroup::new("source").required(true).args(["default", "input"]))
)]
pub struct Cli {
    #[command(flatten)]
    pub files: FileArgs,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        if self.files.default {
            tracing::info!("Setting input and output files to default.");
        }

        let config = self.files.into_config(FileDefaults::default());
        tracing::info!("Input file: '{}'", config.input.display());
        tracing::info!("Output file: '{}'", config.output.display());

        // The NFA is printed before the output file is written
        let outcome = ConcatUseCase::new(config)
            .execute(print_result)
            .context("Could not concatenate the finite automata")?;

        tracing::debug!("Result: {}", outcome.nfa.summary());
        Ok(())
    }
}

fn print_result(json: &str) {
    println!("Resulting NFA for A and B:\n");
    println!("{json}\n");
}
