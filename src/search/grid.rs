// src/search/grid.rs

use crate::errors::{PuzzleError, Result};

/// Rectangular grid of letters, indexed by (row, col).
///
/// Built once per input and read-only afterwards. Out-of-bounds lookups
/// return `None` so scans can probe freely without bounds arithmetic at
/// every call site.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: Vec<Vec<u8>>,
    width: usize,
}

impl Grid {
    /// Build a grid from input lines.
    ///
    /// The input must be non-empty and rectangular; a ragged line is a
    /// parse error naming the offending line.
    pub fn from_lines(lines: &[String]) -> Result<Self> {
        let rows: Vec<Vec<u8>> = lines
            .iter()
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.trim().as_bytes().to_vec())
            .collect();

        let width = match rows.first() {
            Some(first) => first.len(),
            None => {
                return Err(PuzzleError::Parse {
                    line: 1,
                    msg: "empty grid".to_string(),
                });
            }
        };

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(PuzzleError::Parse {
                    line: i + 1,
                    msg: format!("ragged grid row: expected width {width}, got {}", row.len()),
                });
            }
        }

        Ok(Self { rows, width })
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Letter at (row, col), or `None` if outside the grid.
    pub fn at(&self, row: i64, col: i64) -> Option<u8> {
        if row < 0 || col < 0 {
            return None;
        }
        self.rows
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
    }
}
