//! Human-readable output.

use std::time::Duration;

use pancake_search::Termination;

use crate::runner::RunOutput;

/// Output lines for a finished run, in print order.
///
/// Solved runs list each flip; every other outcome reports that no solution
/// was found and why. The last line is always the search time.
#[must_use]
pub fn render_lines(output: &RunOutput) -> Vec<String> {
    let mut lines = Vec::new();
    let stop = match output.result.termination {
        Termination::Solved { .. } => None,
        Termination::Exhausted => Some("search space exhausted"),
        Termination::ExpansionBudgetExceeded => Some("expansion budget reached"),
        Termination::Cancelled => Some("cancelled"),
    };
    match (stop, output.result.solution()) {
        (None, Some(solution)) if solution.is_already_sorted() => {
            lines.push(format!(
                "Your stack of pancakes {} is already sorted!",
                solution.initial
            ));
        }
        (None, Some(solution)) => {
            lines.push(format!(
                "To sort the stack {} do the following:",
                solution.initial
            ));
            for (i, step) in solution.steps.iter().enumerate() {
                lines.push(format!(
                    "Step {}: flip the top {} pancakes to get {}",
                    i + 1,
                    step.flip_depth,
                    step.stack
                ));
            }
            lines.push(format!(
                "Total: {} pancakes flipped in {} flips",
                solution.total_cost,
                solution.flip_count()
            ));
        }
        (reason, _) => {
            lines.push(format!(
                "No solution found for {} ({} after {} expansions)",
                output.initial,
                reason.unwrap_or("goal path lost"),
                output.result.stats.expansions
            ));
        }
    }
    lines.push(format_elapsed(output.elapsed));
    lines
}

/// `Execution time: X.XXs`.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("Execution time: {:.2}s", elapsed.as_secs_f64())
}
