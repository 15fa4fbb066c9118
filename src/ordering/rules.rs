// src/ordering/rules.rs

//! Ordering rules and the order-validity predicate.

/// A pairwise ordering rule `before|after`.
///
/// If both pages appear in an update, `before` must occur at a smaller
/// index than `after`. Rules whose pages are absent from a given update
/// are vacuously satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderingRule {
    pub before: u32,
    pub after: u32,
}

/// Returns `true` if no applicable rule is inverted in `pages`.
///
/// Pages are assumed unique within one update, so `position` finds the
/// page's single index.
pub fn is_in_order(pages: &[u32], rules: &[OrderingRule]) -> bool {
    for rule in rules {
        let before = pages.iter().position(|&p| p == rule.before);
        let after = pages.iter().position(|&p| p == rule.after);

        if let (Some(b), Some(a)) = (before, after) {
            if b > a {
                return false;
            }
        }
    }
    true
}

/// Middle page of an update, or `None` for an empty one.
pub fn middle_page(pages: &[u32]) -> Option<u32> {
    pages.get(pages.len() / 2).copied()
}

/// Sum of the middle pages of the updates that already satisfy the rules.
pub fn sum_ordered_middles(updates: &[Vec<u32>], rules: &[OrderingRule]) -> u32 {
    updates
        .iter()
        .filter(|u| is_in_order(u, rules))
        .filter_map(|u| middle_page(u))
        .sum()
}
