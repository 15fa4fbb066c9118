use puzzlerun::errors::PuzzleError;
use puzzlerun::search::{count_cross, count_word, Grid};

fn lines(raw: &str) -> Vec<String> {
    raw.lines().map(str::to_string).collect()
}

fn sample_grid() -> Grid {
    Grid::from_lines(&lines(
        "MMMSXXMASM\n\
         MSAMXMSMSA\n\
         AMXSXMAAMM\n\
         MSAMASMSMX\n\
         XMASAMXAMM\n\
         XXAMMXXAMA\n\
         SMSMSASXSS\n\
         SAXAMASAAA\n\
         MAMMMXMMMM\n\
         MXMXAXMASX",
    ))
    .unwrap()
}

#[test]
fn sample_grid_has_18_words() {
    assert_eq!(count_word(&sample_grid(), b"XMAS"), 18);
}

#[test]
fn sample_grid_has_9_crosses() {
    assert_eq!(count_cross(&sample_grid()), 9);
}

#[test]
fn single_straight_occurrences() {
    let grid = Grid::from_lines(&lines("XMAS")).unwrap();
    assert_eq!(count_word(&grid, b"XMAS"), 1);

    // Backwards reads count via the opposite direction.
    let grid = Grid::from_lines(&lines("SAMX")).unwrap();
    assert_eq!(count_word(&grid, b"XMAS"), 1);

    let grid = Grid::from_lines(&lines("X\nM\nA\nS")).unwrap();
    assert_eq!(count_word(&grid, b"XMAS"), 1);
}

#[test]
fn diagonal_occurrence() {
    let grid = Grid::from_lines(&lines("X...\n.M..\n..A.\n...S")).unwrap();
    assert_eq!(count_word(&grid, b"XMAS"), 1);
}

#[test]
fn no_wrap_around_grid_edges() {
    // "XM" at the end of one row followed by "AS" at the start of the next
    // must not count.
    let grid = Grid::from_lines(&lines("..XM\nAS..")).unwrap();
    assert_eq!(count_word(&grid, b"XMAS"), 0);
}

#[test]
fn minimal_cross() {
    let grid = Grid::from_lines(&lines("M.S\n.A.\nM.S")).unwrap();
    assert_eq!(count_cross(&grid), 1);

    // Both diagonals may read top-to-bottom.
    let grid = Grid::from_lines(&lines("M.M\n.A.\nS.S")).unwrap();
    assert_eq!(count_cross(&grid), 1);

    // A MAM diagonal disqualifies the centre.
    let grid = Grid::from_lines(&lines("M.S\n.A.\nS.M")).unwrap();
    assert_eq!(count_cross(&grid), 0);
}

#[test]
fn ragged_and_empty_grids_are_rejected() {
    let err = Grid::from_lines(&lines("ABC\nAB")).unwrap_err();
    assert!(matches!(err, PuzzleError::Parse { line: 2, .. }));

    let err = Grid::from_lines(&[]).unwrap_err();
    assert!(matches!(err, PuzzleError::Parse { .. }));
}
