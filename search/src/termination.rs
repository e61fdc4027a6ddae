//! Search phases, terminal outcomes, and run statistics.

use crate::node::NodeHandle;
use crate::sink::ChildDisposition;

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A zero-gap state was popped.
    Solved { goal: NodeHandle },
    /// The frontier ran dry without reaching the goal.
    Exhausted,
    /// `max_expansions` was reached first.
    ExpansionBudgetExceeded,
    /// The cancel flag was raised.
    Cancelled,
}

impl Termination {
    /// Stable tag for reports and fixtures.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solved { .. } => "solved",
            Self::Exhausted => "exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Driver state machine: `Ready → Running → Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed; the root is not yet in the frontier.
    Ready,
    /// Popping and expanding.
    Running,
    /// Terminal. Further steps are no-ops.
    Finished(Termination),
}

impl Phase {
    /// Whether the search has stopped for good.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

/// Counters collected over one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Nodes popped and expanded (the goal pop is not an expansion).
    pub expansions: u64,
    /// Children built by flips.
    pub generated: u64,
    /// Nodes inserted into the frontier, root included.
    pub inserted: u64,
    /// Frontier entries replaced by a cheaper path.
    pub improved: u64,
    /// Children whose state was already in the frontier at equal or lower cost.
    pub not_improved: u64,
    /// Children whose state had already been expanded.
    pub discarded_visited: u64,
    /// Superseded frontier entries skipped while popping.
    pub stale_skipped: u64,
    /// Maximum number of live frontier entries.
    pub frontier_high_water: u64,
    /// Nodes moved into the arena (every popped node).
    pub nodes_retained: u64,
}

impl SearchStats {
    pub(crate) fn record(&mut self, disposition: ChildDisposition) {
        self.generated += 1;
        match disposition {
            ChildDisposition::Inserted => self.inserted += 1,
            ChildDisposition::Improved => self.improved += 1,
            ChildDisposition::NotImproved => self.not_improved += 1,
            ChildDisposition::AlreadyVisited => self.discarded_visited += 1,
        }
    }
}
