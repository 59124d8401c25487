// ============================================================
// Layer 1 — CLI File Arguments
// ============================================================
// The three file-selection flags:
//
//   -d, --default        input.json → output.json
//   -i, --input=FILE     FILE → output.json (unless -o)
//   -o, --output=FILE    override the output file
//
// Exactly one of --default / --input is required; that rule
// is declared on the Cli struct as the "source" ArgGroup.
//
// Reference: clap derive tutorial (Args, ArgGroup)

use clap::Args;
use std::path::PathBuf;

use crate::application::concat_use_case::{ConcatConfig, FileDefaults};

#[derive(Args, Debug)]
pub struct FileArgs {
    /// Reads the default input and output files (input.json and output.json)
    #[arg(short, long)]
    pub default: bool,

    /// Reads the specified file as input (writes to output.json unless --output is given)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Writes the output to the specified file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl FileArgs {
    /// Resolve the flags against the designated defaults.
    /// The application layer never sees clap types.
    pub fn into_config(self, defaults: FileDefaults) -> ConcatConfig {
        let input = match self.input {
            Some(path) if !self.default => path,
            _ => defaults.input,
        };

        ConcatConfig {
            input,
            output: self.output.unwrap_or(defaults.output),
        }
    }
}
