// src/ordering/graph.rs

use std::collections::{HashMap, HashSet};

use crate::ordering::rules::OrderingRule;

/// Dependency graph derived from one update and the applicable rules.
///
/// This is intentionally lightweight; acyclicity is checked separately in
/// [`topo`](crate::ordering::topo), so here we just keep adjacency and
/// in-degree information for the ordering loop. The graph is built fresh
/// per update and owned exclusively by that call.
#[derive(Debug, Clone)]
pub struct RuleGraph {
    /// Pages in the order they appear in the update. Seeding the ready
    /// queue in this order is what makes the topological order stable.
    order: Vec<u32>,
    /// Direct successors: for each page, the pages that must come after it,
    /// in first-occurrence order.
    successors: HashMap<u32, Vec<u32>>,
    /// Number of unsatisfied predecessors per page.
    in_degree: HashMap<u32, usize>,
}

impl RuleGraph {
    /// Build the graph for one update.
    ///
    /// Only rules with both pages present in `pages` contribute edges;
    /// everything else is vacuous for this update. Duplicate rules collapse
    /// to a single edge, so a repeated rule neither inflates in-degrees nor
    /// shifts the first-reached tie-break.
    pub fn from_update(pages: &[u32], rules: &[OrderingRule]) -> Self {
        let present: HashSet<u32> = pages.iter().copied().collect();

        let mut successors: HashMap<u32, Vec<u32>> =
            pages.iter().map(|&p| (p, Vec::new())).collect();
        let mut in_degree: HashMap<u32, usize> = pages.iter().map(|&p| (p, 0)).collect();
        let mut seen: HashSet<(u32, u32)> = HashSet::new();

        for rule in rules {
            if present.contains(&rule.before)
                && present.contains(&rule.after)
                && seen.insert((rule.before, rule.after))
            {
                if let Some(next) = successors.get_mut(&rule.before) {
                    next.push(rule.after);
                }
                if let Some(deg) = in_degree.get_mut(&rule.after) {
                    *deg += 1;
                }
            }
        }

        Self {
            order: pages.to_vec(),
            successors,
            in_degree,
        }
    }

    /// Pages in update order.
    pub fn pages(&self) -> impl Iterator<Item = u32> + '_ {
        self.order.iter().copied()
    }

    /// Number of pages in the update.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Direct successors of a page (the `after` sides of its applicable rules).
    pub fn successors_of(&self, page: u32) -> &[u32] {
        self.successors
            .get(&page)
            .map(|n| n.as_slice())
            .unwrap_or(&[])
    }

    /// Fresh copy of the in-degree map for the ordering loop to consume.
    pub fn in_degrees(&self) -> HashMap<u32, usize> {
        self.in_degree.clone()
    }
}
