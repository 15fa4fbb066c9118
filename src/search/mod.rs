// src/search/mod.rs

//! Letter-grid word search.
//!
//! - [`grid`] holds the rectangular grid of letters.
//! - [`scan`] counts straight-line word occurrences and X-shaped `MAS`
//!   crossings.

pub mod grid;
pub mod scan;

pub use grid::Grid;
pub use scan::{count_cross, count_word};
