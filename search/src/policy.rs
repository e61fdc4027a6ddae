//! Search policy types.

use std::fmt;
use std::str::FromStr;

use pancake_kernel::stack::Stack;

use crate::error::SearchError;

/// How the frontier orders nodes.
///
/// Both models find a minimum backward-cost solution; the gap heuristic
/// only changes how many nodes get expanded on the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CostModel {
    /// `total_cost = gap + backward_cost`.
    #[default]
    AStar,
    /// `total_cost = backward_cost`; gap is used only as the goal test.
    UniformCost,
}

impl CostModel {
    /// Heuristic term added to the backward cost.
    #[must_use]
    pub fn heuristic(self, stack: &Stack) -> u64 {
        match self {
            Self::AStar => stack.gap(),
            Self::UniformCost => 0,
        }
    }

    /// Stable identifier used on the command line and in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::UniformCost => "uniform-cost",
        }
    }
}

impl fmt::Display for CostModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized cost model name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCostModelError {
    pub input: String,
}

impl fmt::Display for ParseCostModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy {:?} (expected \"astar\" or \"uniform-cost\")",
            self.input
        )
    }
}

impl std::error::Error for ParseCostModelError {}

impl FromStr for CostModel {
    type Err = ParseCostModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "astar" | "a*" => Ok(Self::AStar),
            "uniform-cost" | "ucs" => Ok(Self::UniformCost),
            _ => Err(ParseCostModelError {
                input: s.to_string(),
            }),
        }
    }
}

/// Search ordering and budget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    /// Frontier ordering.
    pub cost_model: CostModel,
    /// Hard cap on node expansions (`None` = run to completion).
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    /// Unbounded policy for the given cost model.
    #[must_use]
    pub fn new(cost_model: CostModel) -> Self {
        Self {
            cost_model,
            max_expansions: None,
        }
    }

    /// Validate the policy before any search step runs.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for a zero expansion budget,
    /// which could never expand the root.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }
}
