// src/input/loader.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::errors::PuzzleError;
use crate::input::parse::{parse_ordering, parse_reports, OrderingDoc};
use crate::search::grid::Grid;

/// Read a puzzle input file into lines.
///
/// This only performs I/O; the per-puzzle parsers take it from here.
/// Failures surface as [`PuzzleError::Io`] with the path attached as
/// context.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .map_err(PuzzleError::Io)
        .with_context(|| format!("reading puzzle input at {:?}", path))?;

    Ok(contents.lines().map(str::to_string).collect())
}

/// Load and parse a level-report input file.
pub fn load_reports(path: impl AsRef<Path>) -> Result<Vec<Vec<i64>>> {
    let path = path.as_ref();
    let lines = read_lines(path)?;
    let reports =
        parse_reports(&lines).with_context(|| format!("parsing reports from {:?}", path))?;
    Ok(reports)
}

/// Load and parse an ordering input file (rules + updates).
pub fn load_ordering(path: impl AsRef<Path>) -> Result<OrderingDoc> {
    let path = path.as_ref();
    let lines = read_lines(path)?;
    let doc =
        parse_ordering(&lines).with_context(|| format!("parsing ordering input from {:?}", path))?;
    Ok(doc)
}

/// Load a word-search input file as a letter grid.
pub fn load_grid(path: impl AsRef<Path>) -> Result<Grid> {
    let path = path.as_ref();
    let lines = read_lines(path)?;
    let grid = Grid::from_lines(&lines)
        .with_context(|| format!("parsing letter grid from {:?}", path))?;
    Ok(grid)
}
