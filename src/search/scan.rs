// src/search/scan.rs

//! Word-search scans over a [`Grid`].

use crate::search::grid::Grid;

/// All eight compass directions as (row, col) steps.
const DIRECTIONS: [(i64, i64); 8] = [
    (0, 1),
    (1, 0),
    (1, 1),
    (-1, 1),
    (0, -1),
    (-1, 0),
    (-1, -1),
    (1, -1),
];

/// Count occurrences of `word` starting at any cell, read in any of the
/// eight directions. Overlapping occurrences all count.
pub fn count_word(grid: &Grid, word: &[u8]) -> usize {
    let mut count = 0;

    for row in 0..grid.height() as i64 {
        for col in 0..grid.width() as i64 {
            for step in DIRECTIONS {
                if matches_at(grid, row, col, step, word) {
                    count += 1;
                }
            }
        }
    }

    count
}

/// Count cells that are the centre `A` of two diagonal `MAS` strings,
/// each readable forwards or backwards.
pub fn count_cross(grid: &Grid) -> usize {
    let mut count = 0;

    for row in 0..grid.height() as i64 {
        for col in 0..grid.width() as i64 {
            if grid.at(row, col) != Some(b'A') {
                continue;
            }

            let down_right = [grid.at(row - 1, col - 1), grid.at(row + 1, col + 1)];
            let up_right = [grid.at(row + 1, col - 1), grid.at(row - 1, col + 1)];

            if is_mas_ends(down_right) && is_mas_ends(up_right) {
                count += 1;
            }
        }
    }

    count
}

fn matches_at(grid: &Grid, row: i64, col: i64, (dr, dc): (i64, i64), word: &[u8]) -> bool {
    word.iter().enumerate().all(|(i, &ch)| {
        let i = i as i64;
        grid.at(row + i * dr, col + i * dc) == Some(ch)
    })
}

/// The two ends around an `A` centre spell `MAS` in either direction.
fn is_mas_ends(ends: [Option<u8>; 2]) -> bool {
    matches!(
        ends,
        [Some(b'M'), Some(b'S')] | [Some(b'S'), Some(b'M')]
    )
}
