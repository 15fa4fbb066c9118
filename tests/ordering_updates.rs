use puzzlerun::errors::PuzzleError;
use puzzlerun::ordering::{
    is_in_order, middle_page, sum_ordered_middles, sum_reordered_middles, topological_order,
    OrderingRule,
};

fn rule(before: u32, after: u32) -> OrderingRule {
    OrderingRule { before, after }
}

/// Rule set and updates from the well-known sample input.
fn sample() -> (Vec<OrderingRule>, Vec<Vec<u32>>) {
    let rules = vec![
        rule(47, 53),
        rule(97, 13),
        rule(97, 61),
        rule(97, 47),
        rule(75, 29),
        rule(61, 13),
        rule(75, 53),
        rule(29, 13),
        rule(97, 29),
        rule(53, 29),
        rule(61, 53),
        rule(97, 53),
        rule(61, 29),
        rule(47, 13),
        rule(75, 47),
        rule(97, 75),
        rule(47, 61),
        rule(75, 61),
        rule(47, 29),
        rule(75, 13),
        rule(53, 13),
    ];
    let updates = vec![
        vec![75, 47, 61, 53, 29],
        vec![97, 61, 53, 29, 13],
        vec![75, 29, 13],
        vec![75, 97, 47, 61, 53],
        vec![61, 13, 29],
        vec![97, 13, 75, 29, 47],
    ];
    (rules, updates)
}

#[test]
fn sample_updates_split_into_ordered_and_not() {
    let (rules, updates) = sample();

    assert!(is_in_order(&updates[0], &rules));
    assert!(is_in_order(&updates[1], &rules));
    assert!(is_in_order(&updates[2], &rules));
    assert!(!is_in_order(&updates[3], &rules));
    assert!(!is_in_order(&updates[4], &rules));
    assert!(!is_in_order(&updates[5], &rules));
}

#[test]
fn rules_on_absent_pages_are_vacuous() {
    let pages = vec![1, 2, 3];
    let applicable = vec![rule(1, 3)];
    assert!(is_in_order(&pages, &applicable));

    // Adding rules about pages not in the update changes nothing.
    let mut padded = applicable.clone();
    padded.push(rule(9, 1));
    padded.push(rule(3, 8));
    padded.push(rule(8, 9));
    assert!(is_in_order(&pages, &padded));

    // An inverted applicable rule still flips the result.
    padded.push(rule(3, 1));
    assert!(!is_in_order(&pages, &padded));
}

#[test]
fn sample_sum_of_ordered_middles() {
    let (rules, updates) = sample();
    assert_eq!(sum_ordered_middles(&updates, &rules), 143);
}

#[test]
fn sample_reordering() {
    let (rules, _) = sample();

    assert_eq!(
        topological_order(&[75, 97, 47, 61, 53], &rules).unwrap(),
        vec![97, 75, 47, 61, 53]
    );
    assert_eq!(
        topological_order(&[61, 13, 29], &rules).unwrap(),
        vec![61, 29, 13]
    );
    assert_eq!(
        topological_order(&[97, 13, 75, 29, 47], &rules).unwrap(),
        vec![97, 75, 47, 29, 13]
    );
}

#[test]
fn sample_sum_of_reordered_middles() {
    let (rules, updates) = sample();
    assert_eq!(sum_reordered_middles(&updates, &rules).unwrap(), 123);
}

#[test]
fn no_applicable_rules_keeps_update_order() {
    let pages = vec![5, 3, 4];
    let order = topological_order(&pages, &[]).unwrap();
    assert_eq!(order, pages);
}

#[test]
fn ready_ties_resolve_in_update_order() {
    // 5 and 4 are both ready from the start; 5 comes first in the update,
    // so it is emitted first even though 4 unlocks 3.
    let order = topological_order(&[5, 3, 4], &[rule(4, 3)]).unwrap();
    assert_eq!(order, vec![5, 4, 3]);
}

#[test]
fn reordering_is_idempotent() {
    let (rules, updates) = sample();

    for update in &updates {
        let once = topological_order(update, &rules).unwrap();
        let twice = topological_order(&once, &rules).unwrap();
        assert_eq!(once, twice);
    }
}

#[test]
fn duplicate_rules_do_not_change_the_order() {
    let rules = vec![rule(2, 1), rule(2, 1), rule(1, 3)];
    let order = topological_order(&[1, 2, 3], &rules).unwrap();
    assert_eq!(order, vec![2, 1, 3]);
}

#[test]
fn interleaved_duplicate_rules_collapse_to_single_edges() {
    // The repeated 1|2 must not count page 2's predecessor twice: 2 reaches
    // zero in-degree as soon as 1 is emitted, ahead of 3.
    let rules = vec![rule(1, 2), rule(1, 3), rule(1, 2)];
    let order = topological_order(&[1, 3, 2], &rules).unwrap();
    assert_eq!(order, vec![1, 2, 3]);
}

#[test]
fn cyclic_rules_are_an_explicit_error() {
    let rules = vec![rule(1, 2), rule(2, 3), rule(3, 1)];
    let err = topological_order(&[1, 2, 3], &rules).unwrap_err();
    assert!(matches!(err, PuzzleError::CyclicRules(_)));

    // The cycle only matters if all of its pages are present.
    let order = topological_order(&[1, 2], &rules).unwrap();
    assert_eq!(order, vec![1, 2]);
}

#[test]
fn middle_page_of_odd_length_updates() {
    assert_eq!(middle_page(&[75, 47, 61, 53, 29]), Some(61));
    assert_eq!(middle_page(&[7]), Some(7));
    assert_eq!(middle_page(&[]), None);
}
