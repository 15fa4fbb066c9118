// src/reports/mod.rs

//! Level-report safety classification.
//!
//! - [`safety`] holds the per-report safety predicates and the counting
//!   folds over a whole input.

pub mod safety;

pub use safety::{count_safe, count_safe_with_dampener, is_safe, is_safe_with_dampener};
