// src/ordering/mod.rs

//! Page-ordering rules: validity checking and reordering.
//!
//! - [`rules`] defines the pairwise "must precede" relation and the
//!   order-validity predicate.
//! - [`graph`] holds the per-update dependency graph derived from the
//!   applicable rules.
//! - [`topo`] contains the stable Kahn topological ordering used to repair
//!   updates that violate the rules.

pub mod graph;
pub mod rules;
pub mod topo;

pub use graph::RuleGraph;
pub use rules::{is_in_order, middle_page, sum_ordered_middles, OrderingRule};
pub use topo::{sum_reordered_middles, topological_order};
