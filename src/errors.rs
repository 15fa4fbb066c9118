// src/errors.rs

//! Crate-wide error types.
//!
//! Core parsing and solving failures are structured ([`PuzzleError`]);
//! the application boundary wraps them with `anyhow` context.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("parse error on line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error("cycle detected in ordering rules involving page {0}")]
    CyclicRules(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
