//! Timed search runs.

use std::time::{Duration, Instant};

use log::{info, LevelFilter};
use pancake_kernel::stack::Stack;
use pancake_search::{search, DiagnosticSink, LogSink, NoopSink, SearchPolicy, SearchResult};

use crate::error::HarnessError;

/// A finished search with its input and wall-clock time.
#[derive(Debug)]
pub struct RunOutput {
    /// The stack the search started from.
    pub initial: Stack,
    /// The policy the search ran under.
    pub policy: SearchPolicy,
    /// Search result, arena included.
    pub result: SearchResult,
    /// Time spent in the search only (no parsing or rendering).
    pub elapsed: Duration,
}

/// Run a search from `initial` under `policy` and time it.
///
/// Per-node events go to [`LogSink`] when debug logging is enabled for any
/// target, and are discarded otherwise.
///
/// # Errors
///
/// Returns [`HarnessError::Search`] for an invalid policy or a search
/// invariant violation.
pub fn run_search(initial: Stack, policy: &SearchPolicy) -> Result<RunOutput, HarnessError> {
    info!(
        "solving {initial} with {} (budget: {:?})",
        policy.cost_model, policy.max_expansions
    );

    let mut log_sink = LogSink;
    let mut noop_sink = NoopSink;
    let sink: &mut dyn DiagnosticSink = if log::max_level() >= LevelFilter::Debug {
        &mut log_sink
    } else {
        &mut noop_sink
    };

    let start = Instant::now();
    let result = search(initial.clone(), policy, sink)?;
    let elapsed = start.elapsed();

    info!(
        "search {} after {} expansions in {elapsed:?}",
        result.termination.as_str(),
        result.stats.expansions
    );
    Ok(RunOutput {
        initial,
        policy: policy.clone(),
        result,
        elapsed,
    })
}
