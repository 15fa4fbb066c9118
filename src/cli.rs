// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `puzzlerun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "puzzlerun",
    version,
    about = "Solve small text-input puzzles and print their integer answers.",
    long_about = None
)]
pub struct CliArgs {
    /// Which puzzle to solve.
    #[clap(subcommand)]
    pub command: Command,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PUZZLERUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,
}

/// One subcommand per puzzle. Each reads a plain-text input file and prints
/// both answers as `part1: N` / `part2: N` on stdout.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Classify level reports as safe, with and without the dampener.
    Reports {
        /// Path to the input: one report per line, whitespace-separated levels.
        #[arg(long, value_name = "PATH")]
        input: String,
    },

    /// Check page updates against ordering rules and repair the bad ones.
    Ordering {
        /// Path to the input: `X|Y` rules, a blank line, then comma-separated
        /// page updates.
        #[arg(long, value_name = "PATH")]
        input: String,
    },

    /// Count `XMAS` occurrences and `X-MAS` crossings in a letter grid.
    Search {
        /// Path to the input: a rectangular grid of letters.
        #[arg(long, value_name = "PATH")]
        input: String,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
