// src/reports/safety.rs

//! Safety rules for level reports.
//!
//! A report is *safe* when its levels are strictly monotonic and every
//! adjacent step has magnitude 1..=3. The *dampener* variant additionally
//! accepts a report that becomes safe after dropping exactly one level.

/// Returns `true` if every adjacent difference lies in `1..=3` (gradually
/// increasing) or every adjacent difference lies in `-3..=-1` (gradually
/// decreasing).
///
/// Reports with fewer than two levels have no adjacent pairs and are
/// vacuously safe.
pub fn is_safe(levels: &[i64]) -> bool {
    let gradually_up = levels.windows(2).all(|w| (1..=3).contains(&(w[1] - w[0])));
    let gradually_down = levels.windows(2).all(|w| (1..=3).contains(&(w[0] - w[1])));
    gradually_up || gradually_down
}

/// Safety check with a one-removal tolerance.
///
/// Tries [`is_safe`] on the report as-is, then on every copy with a single
/// level removed. This is a deliberate brute force (O(n²)): a single-pass
/// variant disagrees with it on reports where removing the first or last
/// level flips the monotonic direction, and reports are short enough that
/// the quadratic scan is free.
pub fn is_safe_with_dampener(levels: &[i64]) -> bool {
    if is_safe(levels) {
        return true;
    }

    (0..levels.len()).any(|skip| {
        let mut trimmed = levels.to_vec();
        trimmed.remove(skip);
        is_safe(&trimmed)
    })
}

/// Number of safe reports.
pub fn count_safe(reports: &[Vec<i64>]) -> usize {
    reports.iter().filter(|r| is_safe(r)).count()
}

/// Number of reports that are safe once the dampener may drop one level.
pub fn count_safe_with_dampener(reports: &[Vec<i64>]) -> usize {
    reports.iter().filter(|r| is_safe_with_dampener(r)).count()
}
