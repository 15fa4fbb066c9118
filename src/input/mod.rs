// src/input/mod.rs

//! Puzzle input loading and parsing.
//!
//! Responsibilities:
//! - Read a plain-text input file from disk (`loader.rs`).
//! - Parse the per-puzzle record formats (`parse.rs`).

pub mod loader;
pub mod parse;

pub use loader::{load_grid, load_ordering, load_reports, read_lines};
pub use parse::{parse_ordering, parse_reports, OrderingDoc};
