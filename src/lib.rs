// src/lib.rs

pub mod cli;
pub mod errors;
pub mod input;
pub mod logging;
pub mod ordering;
pub mod reports;
pub mod search;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{CliArgs, Command};

/// High-level entry point used by `main.rs`.
///
/// Dispatches to one solver per subcommand. Each solver loads its input,
/// computes both answers, and prints them on stdout as `part1:` / `part2:`.
pub fn run(args: CliArgs) -> Result<()> {
    match args.command {
        Command::Reports { input } => {
            let all = input::load_reports(&input)?;
            debug!(reports = all.len(), "parsed level reports");

            let safe = reports::count_safe(&all);
            let dampened = reports::count_safe_with_dampener(&all);
            info!(safe, dampened, "report classification complete");

            print_answers(safe, dampened);
        }

        Command::Ordering { input } => {
            let doc = input::load_ordering(&input)?;
            debug!(
                rules = doc.rules.len(),
                updates = doc.updates.len(),
                "parsed ordering input"
            );

            let ordered = ordering::sum_ordered_middles(&doc.updates, &doc.rules);
            let reordered = ordering::sum_reordered_middles(&doc.updates, &doc.rules)?;
            info!(ordered, reordered, "ordering check complete");

            print_answers(ordered, reordered);
        }

        Command::Search { input } => {
            let grid = input::load_grid(&input)?;
            debug!(
                height = grid.height(),
                width = grid.width(),
                "parsed letter grid"
            );

            let words = search::count_word(&grid, b"XMAS");
            let crosses = search::count_cross(&grid);
            info!(words, crosses, "word search complete");

            print_answers(words, crosses);
        }
    }

    Ok(())
}

fn print_answers(part1: impl std::fmt::Display, part2: impl std::fmt::Display) {
    println!("part1: {part1}");
    println!("part2: {part2}");
}
