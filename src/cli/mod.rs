// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the majuscule command-line interface.
//!
//! Three subcommands: `repl` reads strings from stdin and prints the top
//! hashtags for each, `complete` answers a batch of inputs as a table or JSON
//! (locally, or by posting to a running server with `--server`), and `serve`
//! exposes the same pipeline over HTTP. Dictionary and frequency files are
//! global flags since every local subcommand loads them.

pub mod display;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use majuscule::search::DEFAULT_RESULT_CEILING;

#[derive(Parser)]
#[command(
    name = "majuscule",
    about = "Suggest camel-cased hashtags for run-together words",
    version
)]
pub struct Cli {
    /// Dictionary file, one word per line (repeat for several)
    #[arg(long = "dict", global = true, action = ArgAction::Append, default_value = "test_data/words")]
    pub dicts: Vec<PathBuf>,

    /// Word frequency table: header line, then `word <tag> <frequency>` records
    #[arg(long, global = true, default_value = "test_data/1_2_all_freq.txt")]
    pub frequency: PathBuf,

    /// Rank by word length alone, without loading the frequency table
    #[arg(long, global = true)]
    pub no_frequency: bool,

    /// Stop each search after this many completed segmentations
    #[arg(long, global = true, default_value_t = DEFAULT_RESULT_CEILING)]
    pub result_ceiling: usize,

    /// Log debug events to stderr (RUST_LOG overrides per target)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read one string per line from stdin and print the top 5 hashtags
    ///
    /// Ranks by word length alone unless --use-frequency is given.
    Repl {
        /// Also weight words by the frequency table
        #[arg(long)]
        use_frequency: bool,
    },

    /// Suggest hashtags for one or more inputs
    Complete {
        /// Strings to segment; `@path` reads one input per line from a file
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Maximum number of hashtags per input
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,

        /// Also show every scored vocabulary match
        #[arg(long)]
        debug: bool,

        /// Print the responses as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Ask a running `majuscule serve` at this URL instead of loading
        /// the dictionaries locally
        #[arg(long, value_name = "URL")]
        server: Option<String>,
    },

    /// Serve suggestions over HTTP
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

impl Cli {
    /// Does the chosen subcommand rank with the frequency table?
    pub fn uses_frequency(&self) -> bool {
        if self.no_frequency {
            return false;
        }
        match &self.command {
            Commands::Repl { use_frequency } => *use_frequency,
            _ => true,
        }
    }
}

/// Expand `@path` arguments into the non-blank lines of that file.
///
/// A lone `@` is taken literally.
pub fn expand_inputs(args: &[String]) -> Result<Vec<String>> {
    let mut inputs = Vec::with_capacity(args.len());
    for arg in args {
        match arg.strip_prefix('@').filter(|path| !path.is_empty()) {
            Some(path) => inputs.extend(read_input_file(Path::new(path))?),
            None => inputs.push(arg.clone()),
        }
    }
    Ok(inputs)
}

fn read_input_file(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read inputs from {}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
