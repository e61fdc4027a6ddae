//! Search entry point and expansion loop.
//!
//! # Loop
//!
//! ```text
//! Ready ── insert root ──► Running
//! Running: cancelled?  → Finished(Cancelled)
//!          budget hit? → Finished(ExpansionBudgetExceeded)
//!          empty?      → Finished(Exhausted)
//!          pop min → arena + visited
//!          gap == 0?   → Finished(Solved)
//!          expand depths 2..n: visited → drop
//!                              in frontier → try_improve
//!                              otherwise → insert
//! ```
//!
//! Visited states are never reopened. Both cost models are consistent
//! (a flip moves the gap by at most one and costs at least two), so the
//! first pop of a state already carries its cheapest path.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};

use pancake_kernel::stack::Stack;

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::node::{NodeArena, SearchNode};
use crate::policy::{CostModel, SearchPolicy};
use crate::sink::{ChildDisposition, DiagnosticSink};
use crate::solution::Solution;
use crate::termination::{Phase, SearchStats, Termination};

/// Result of a finished search.
///
/// Owns the run's arena; dropping the result frees every node.
#[derive(Debug)]
pub struct SearchResult {
    /// Why the search stopped.
    pub termination: Termination,
    /// The cost model the run was ordered by.
    pub cost_model: CostModel,
    /// Every popped node, in pop order.
    pub arena: NodeArena,
    /// Run counters.
    pub stats: SearchStats,
}

impl SearchResult {
    /// Returns `true` if the search terminated at a goal.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self.termination, Termination::Solved { .. })
    }

    /// The goal node, if solved.
    #[must_use]
    pub fn goal(&self) -> Option<&SearchNode> {
        match self.termination {
            Termination::Solved { goal } => self.arena.get(goal),
            _ => None,
        }
    }

    /// Root-to-goal path, if solved. Length is flips + 1.
    #[must_use]
    pub fn path(&self) -> Option<Vec<&SearchNode>> {
        match self.termination {
            Termination::Solved { goal } => Some(self.arena.path_to(goal)),
            _ => None,
        }
    }

    /// The solution as initial stack plus flip steps, if solved.
    #[must_use]
    pub fn solution(&self) -> Option<Solution> {
        self.path().and_then(|path| Solution::from_path(&path))
    }
}

/// Best-first search over one root stack.
///
/// Owns the frontier, visited set and arena for the duration of the run;
/// nothing outside observes them until [`Searcher::run`] hands back a
/// [`SearchResult`].
#[derive(Debug)]
pub struct Searcher<'a> {
    policy: SearchPolicy,
    root: Option<Stack>,
    frontier: Frontier,
    visited: BTreeSet<Stack>,
    arena: NodeArena,
    next_order: u64,
    phase: Phase,
    stats: SearchStats,
    cancel: Option<&'a AtomicBool>,
}

impl<'a> Searcher<'a> {
    /// Prepare a search from `root` under `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
    pub fn new(root: Stack, policy: SearchPolicy) -> Result<Self, SearchError> {
        policy.validate()?;
        Ok(Self {
            policy,
            root: Some(root),
            frontier: Frontier::new(),
            visited: BTreeSet::new(),
            arena: NodeArena::new(),
            next_order: 0,
            phase: Phase::Ready,
            stats: SearchStats::default(),
            cancel: None,
        })
    }

    /// Stop with [`Termination::Cancelled`] once `flag` is set.
    ///
    /// The flag is checked before every pop.
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The live frontier.
    #[must_use]
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Whether `stack` has been expanded (or popped as the goal).
    #[must_use]
    pub fn is_visited(&self, stack: &Stack) -> bool {
        self.visited.contains(stack)
    }

    /// Counters so far.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        let mut stats = self.stats;
        stats.stale_skipped = self.frontier.stale_skipped();
        stats.frontier_high_water = self.frontier.high_water();
        stats.nodes_retained = self.arena.len() as u64;
        stats
    }

    /// Advance by one transition: insert the root, or pop and expand one
    /// node. A no-op once terminal.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Invariant`] if a structural precondition fails
    /// (an empty pop from a non-empty frontier, or an illegal flip depth).
    pub fn step(&mut self, sink: &mut dyn DiagnosticSink) -> Result<Phase, SearchError> {
        match self.phase {
            Phase::Finished(_) => return Ok(self.phase),
            Phase::Ready => {
                self.start();
                return Ok(self.phase);
            }
            Phase::Running => {}
        }

        if self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            return Ok(self.finish(Termination::Cancelled, sink));
        }
        if self
            .policy
            .max_expansions
            .is_some_and(|max| self.stats.expansions >= max)
        {
            return Ok(self.finish(Termination::ExpansionBudgetExceeded, sink));
        }
        if self.frontier.is_empty() {
            return Ok(self.finish(Termination::Exhausted, sink));
        }

        // Frontier was checked non-empty above.
        let Some(node) = self.frontier.pop_min() else {
            return Err(SearchError::Invariant {
                detail: "pop from a non-empty frontier returned nothing".into(),
            });
        };
        sink.on_pop(&node, self.stats.expansions);
        self.visited.insert(node.stack.clone());
        let handle = self.arena.push(node);

        if self.arena[handle].stack.is_sorted() {
            return Ok(self.finish(Termination::Solved { goal: handle }, sink));
        }

        self.stats.expansions += 1;
        let current = &self.arena[handle];
        for depth in current.stack.flip_depths() {
            let flipped = current.stack.flip(depth).map_err(|e| SearchError::Invariant {
                detail: e.to_string(),
            })?;
            sink.on_flip(&current.stack, depth, &flipped);

            let h_cost = self.policy.cost_model.heuristic(&flipped);
            let child = SearchNode::child(handle, current, depth, flipped, h_cost, self.next_order);
            self.next_order += 1;

            let disposition = if self.visited.contains(&child.stack) {
                ChildDisposition::AlreadyVisited
            } else if self.frontier.contains_state(&child.stack) {
                if self.frontier.try_improve(child.clone()) {
                    ChildDisposition::Improved
                } else {
                    ChildDisposition::NotImproved
                }
            } else {
                self.frontier.insert(child.clone());
                ChildDisposition::Inserted
            };
            self.stats.record(disposition);
            sink.on_child(&child, disposition);
        }

        let live = self.frontier.len();
        sink.on_frontier_top(self.frontier.peek_min(), live);
        sink.on_frontier_states(&mut self.frontier.live_states());
        Ok(self.phase)
    }

    /// Step until terminal and return the result.
    ///
    /// # Errors
    ///
    /// Propagates any [`SearchError::Invariant`] raised by [`Searcher::step`].
    pub fn run(mut self, sink: &mut dyn DiagnosticSink) -> Result<SearchResult, SearchError> {
        while !self.step(sink)?.is_terminal() {}
        self.into_result().ok_or_else(|| SearchError::Invariant {
            detail: "terminal phase lost before building the result".into(),
        })
    }

    /// The result of a finished search; `None` while still `Ready` or
    /// `Running`.
    #[must_use]
    pub fn into_result(self) -> Option<SearchResult> {
        let Phase::Finished(termination) = self.phase else {
            return None;
        };
        let stats = self.stats();
        Some(SearchResult {
            termination,
            cost_model: self.policy.cost_model,
            arena: self.arena,
            stats,
        })
    }

    fn start(&mut self) {
        let Some(root) = self.root.take() else {
            return;
        };
        let h_cost = self.policy.cost_model.heuristic(&root);
        let node = SearchNode::root(root, h_cost, self.next_order);
        self.next_order += 1;
        self.frontier.insert(node);
        self.stats.inserted += 1;
        self.phase = Phase::Running;
    }

    fn finish(&mut self, termination: Termination, sink: &mut dyn DiagnosticSink) -> Phase {
        self.phase = Phase::Finished(termination);
        let stats = self.stats();
        sink.on_termination(&termination, &stats);
        self.phase
    }
}

/// Run best-first search from `root` to a terminal phase.
///
/// Exhaustion, budget and cancellation all return `Ok`; inspect
/// [`SearchResult::termination`] for the outcome.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] for pre-flight policy failures and
/// [`SearchError::Invariant`] for structural violations.
pub fn search(
    root: Stack,
    policy: &SearchPolicy,
    sink: &mut dyn DiagnosticSink,
) -> Result<SearchResult, SearchError> {
    Searcher::new(root, policy.clone())?.run(sink)
}
