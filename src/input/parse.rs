// src/input/parse.rs

//! Parsers for the per-puzzle record formats.
//!
//! All parsers work on already-materialized lines and report failures
//! as [`PuzzleError::Parse`] with a 1-based line number. Blank lines are
//! skipped except where they act as a section separator.

use crate::errors::{PuzzleError, Result};
use crate::ordering::rules::OrderingRule;

/// Parsed ordering input: the rule section plus the update section.
#[derive(Debug, Clone)]
pub struct OrderingDoc {
    pub rules: Vec<OrderingRule>,
    pub updates: Vec<Vec<u32>>,
}

/// Parse level reports: one report per line, whitespace-separated integers.
pub fn parse_reports(lines: &[String]) -> Result<Vec<Vec<i64>>> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.split_whitespace()
                .map(|token| parse_int(i + 1, token))
                .collect()
        })
        .collect()
}

/// Parse ordering input: `X|Y` rule lines, a blank separator line, then
/// comma-separated page updates.
pub fn parse_ordering(lines: &[String]) -> Result<OrderingDoc> {
    let separator = lines
        .iter()
        .position(|line| line.trim().is_empty())
        .ok_or_else(|| PuzzleError::Parse {
            line: lines.len(),
            msg: "missing blank line between rules and updates".to_string(),
        })?;

    let rules = lines[..separator]
        .iter()
        .enumerate()
        .map(|(i, line)| parse_rule(i + 1, line))
        .collect::<Result<Vec<_>>>()?;

    let updates = lines[separator + 1..]
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let line_no = separator + 2 + i;
            line.trim()
                .split(',')
                .map(|token| parse_int(line_no, token.trim()))
                .collect()
        })
        .collect::<Result<Vec<Vec<u32>>>>()?;

    Ok(OrderingDoc { rules, updates })
}

fn parse_rule(line_no: usize, line: &str) -> Result<OrderingRule> {
    let (before, after) = line.trim().split_once('|').ok_or_else(|| PuzzleError::Parse {
        line: line_no,
        msg: format!("expected rule of the form X|Y, got '{}'", line.trim()),
    })?;

    Ok(OrderingRule {
        before: parse_int(line_no, before.trim())?,
        after: parse_int(line_no, after.trim())?,
    })
}

fn parse_int<T: std::str::FromStr>(line_no: usize, token: &str) -> Result<T> {
    token.parse().map_err(|_| PuzzleError::Parse {
        line: line_no,
        msg: format!("invalid integer '{token}'"),
    })
}
