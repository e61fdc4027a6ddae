//! Solutions as flip sequences, and the one-call solver entry point.

use pancake_kernel::stack::Stack;

use crate::error::SearchError;
use crate::node::SearchNode;
use crate::policy::{CostModel, SearchPolicy};
use crate::search::search;
use crate::sink::LogSink;
use crate::termination::Termination;

/// One flip of a solution and the stack it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Number of pancakes flipped.
    pub flip_depth: usize,
    /// Stack after the flip.
    pub stack: Stack,
}

/// A root-to-goal flip sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Stack the search started from.
    pub initial: Stack,
    /// Flips in application order. Empty if `initial` was already sorted.
    pub steps: Vec<Step>,
    /// Sum of flip depths.
    pub total_cost: u64,
}

impl Solution {
    /// Build from a root-first node path.
    ///
    /// Returns `None` for an empty path or a non-root node missing its flip
    /// depth.
    #[must_use]
    pub fn from_path(path: &[&SearchNode]) -> Option<Self> {
        let (root, rest) = path.split_first()?;
        let steps = rest
            .iter()
            .map(|node| {
                Some(Step {
                    flip_depth: node.flip_depth?,
                    stack: node.stack.clone(),
                })
            })
            .collect::<Option<Vec<_>>>()?;
        let total_cost = path.last().map_or(0, |goal| goal.backward_cost);
        Some(Self {
            initial: root.stack.clone(),
            steps,
            total_cost,
        })
    }

    /// No flips were needed.
    #[must_use]
    pub fn is_already_sorted(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of flips.
    #[must_use]
    pub fn flip_count(&self) -> usize {
        self.steps.len()
    }

    /// The sorted stack at the end of the sequence.
    #[must_use]
    pub fn final_stack(&self) -> &Stack {
        self.steps.last().map_or(&self.initial, |step| &step.stack)
    }
}

/// What [`run`] found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A minimum-cost flip sequence.
    Solved(Solution),
    /// The reachable space held no sorted stack.
    Exhausted,
}

/// Solve `initial` without a budget, logging progress through [`LogSink`].
///
/// # Errors
///
/// Returns [`SearchError::Invariant`] if the driver hits a structural
/// violation, or if an unbounded, uncancellable run somehow ends in any
/// other way than solved or exhausted.
pub fn run(initial: Stack, cost_model: CostModel) -> Result<Outcome, SearchError> {
    let result = search(initial, &SearchPolicy::new(cost_model), &mut LogSink)?;
    match result.termination {
        Termination::Solved { .. } => result
            .solution()
            .map(Outcome::Solved)
            .ok_or_else(|| SearchError::Invariant {
                detail: "solved run has no reconstructible path".into(),
            }),
        Termination::Exhausted => Ok(Outcome::Exhausted),
        other => Err(SearchError::Invariant {
            detail: format!("unbounded run ended as {}", other.as_str()),
        }),
    }
}
