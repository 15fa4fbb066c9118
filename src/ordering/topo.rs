// src/ordering/topo.rs

//! Stable topological ordering of an update under the applicable rules.
//!
//! Kahn's algorithm with a FIFO ready queue: the earliest page to reach
//! zero in-degree is emitted first, and pages becoming ready in the same
//! step keep insertion order. Several valid topological orders usually
//! exist; this tie-break picks one deterministically, and re-running the
//! ordering on its own output leaves it unchanged.

use std::collections::VecDeque;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::errors::{PuzzleError, Result};
use crate::ordering::graph::RuleGraph;
use crate::ordering::rules::{is_in_order, middle_page, OrderingRule};

/// Compute a total ordering of `pages` consistent with every rule whose
/// both pages are present.
///
/// Rule-induced cycles are out of contract for well-formed puzzle input;
/// rather than silently returning a truncated sequence, they surface as
/// [`PuzzleError::CyclicRules`].
pub fn topological_order(pages: &[u32], rules: &[OrderingRule]) -> Result<Vec<u32>> {
    let graph = RuleGraph::from_update(pages, rules);
    ensure_acyclic(&graph)?;

    let mut in_degree = graph.in_degrees();

    // Seed the ready queue in update order so ties resolve the same way
    // on every run.
    let mut ready: VecDeque<u32> = graph
        .pages()
        .filter(|p| in_degree.get(p).copied() == Some(0))
        .collect();

    let mut ordered = Vec::with_capacity(graph.len());

    while let Some(page) = ready.pop_front() {
        ordered.push(page);

        for &next in graph.successors_of(page) {
            if let Some(deg) = in_degree.get_mut(&next) {
                *deg -= 1;
                if *deg == 0 {
                    ready.push_back(next);
                }
            }
        }
    }

    debug_assert_eq!(ordered.len(), graph.len());
    debug!(pages = graph.len(), "update reordered");
    Ok(ordered)
}

/// Sum of the middle pages of the incorrectly ordered updates, after each
/// has been repaired with [`topological_order`].
pub fn sum_reordered_middles(updates: &[Vec<u32>], rules: &[OrderingRule]) -> Result<u32> {
    let mut total = 0;

    for update in updates.iter().filter(|u| !is_in_order(u, rules)) {
        let ordered = topological_order(update, rules)?;
        if let Some(mid) = middle_page(&ordered) {
            total += mid;
        }
    }

    Ok(total)
}

/// Reject rule sets that form a cycle among the pages of this update.
///
/// A topological sort over a petgraph view will fail iff there is a cycle,
/// and names a page on it for the error message.
fn ensure_acyclic(graph: &RuleGraph) -> Result<()> {
    let mut check: DiGraphMap<u32, ()> = DiGraphMap::new();

    for page in graph.pages() {
        check.add_node(page);
    }
    for page in graph.pages() {
        for &next in graph.successors_of(page) {
            check.add_edge(page, next, ());
        }
    }

    match toposort(&check, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(PuzzleError::CyclicRules(cycle.node_id())),
    }
}
