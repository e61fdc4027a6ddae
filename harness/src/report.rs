//! JSON run report with a content digest over the solution.
//!
//! The digest basis is the canonical JSON of `{initial, steps, strategy}`
//! hashed under [`DOMAIN_SOLUTION`]. Statistics and elapsed time are in the
//! report but not in the basis, so equal solutions have equal digests no
//! matter how long they took.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::json;

use pancake_kernel::digest::canon::canonical_json_bytes;
use pancake_kernel::digest::hash::{canonical_hash, ContentHash, DOMAIN_SOLUTION};
use pancake_kernel::stack::Stack;
use pancake_search::{CostModel, SearchStats, Step};

use crate::error::HarnessError;
use crate::runner::RunOutput;

/// One flip in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStep {
    pub flip_depth: usize,
    pub stack: Vec<i64>,
}

impl From<&Step> for ReportStep {
    fn from(step: &Step) -> Self {
        Self {
            flip_depth: step.flip_depth,
            stack: step.stack.as_slice().to_vec(),
        }
    }
}

/// Search counters in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStats {
    pub expansions: u64,
    pub generated: u64,
    pub inserted: u64,
    pub improved: u64,
    pub not_improved: u64,
    pub discarded_visited: u64,
    pub stale_skipped: u64,
    pub frontier_high_water: u64,
    pub nodes_retained: u64,
}

impl From<SearchStats> for ReportStats {
    fn from(s: SearchStats) -> Self {
        Self {
            expansions: s.expansions,
            generated: s.generated,
            inserted: s.inserted,
            improved: s.improved,
            not_improved: s.not_improved,
            discarded_visited: s.discarded_visited,
            stale_skipped: s.stale_skipped,
            frontier_high_water: s.frontier_high_water,
            nodes_retained: s.nodes_retained,
        }
    }
}

/// Serializable summary of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Cost model identifier (`"astar"` or `"uniform-cost"`).
    pub strategy: String,
    /// Input stack, top first.
    pub initial: Vec<i64>,
    /// Termination tag (`"solved"`, `"exhausted"`, ...).
    pub outcome: String,
    /// Flips in order. Empty unless solved.
    pub steps: Vec<ReportStep>,
    /// Sum of flip depths, if solved.
    pub total_cost: Option<u64>,
    /// Search counters.
    pub stats: ReportStats,
    /// `sha256:` digest of the solution basis, if solved.
    pub solution_digest: Option<String>,
    /// Search time in microseconds. Not part of the digest.
    pub elapsed_micros: u64,
}

impl RunReport {
    /// Build the report for a finished run.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Report`] if the digest basis cannot be
    /// canonicalized.
    pub fn from_output(output: &RunOutput) -> Result<Self, HarnessError> {
        let strategy = output.policy.cost_model;
        let solution = output.result.solution();
        let steps: Vec<ReportStep> = solution
            .as_ref()
            .map(|s| s.steps.iter().map(ReportStep::from).collect())
            .unwrap_or_default();
        let solution_digest = match &solution {
            Some(_) => Some(
                solution_digest(&output.initial, &steps, strategy)?
                    .as_str()
                    .to_string(),
            ),
            None => None,
        };

        Ok(Self {
            strategy: strategy.as_str().to_string(),
            initial: output.initial.as_slice().to_vec(),
            outcome: output.result.termination.as_str().to_string(),
            steps,
            total_cost: solution.as_ref().map(|s| s.total_cost),
            stats: output.result.stats.into(),
            solution_digest,
            elapsed_micros: u64::try_from(output.elapsed.as_micros()).unwrap_or(u64::MAX),
        })
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Report`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, HarnessError> {
        serde_json::to_string_pretty(self).map_err(|e| HarnessError::Report {
            detail: e.to_string(),
        })
    }
}

/// Digest of `{initial, steps, strategy}` under [`DOMAIN_SOLUTION`].
///
/// # Errors
///
/// Returns [`HarnessError::Report`] if canonicalization fails.
pub fn solution_digest(
    initial: &Stack,
    steps: &[ReportStep],
    strategy: CostModel,
) -> Result<ContentHash, HarnessError> {
    let basis = json!({
        "initial": initial.as_slice(),
        "steps": steps
            .iter()
            .map(|s| json!({ "flip_depth": s.flip_depth, "stack": s.stack }))
            .collect::<Vec<_>>(),
        "strategy": strategy.as_str(),
    });
    let bytes = canonical_json_bytes(&basis).map_err(|e| HarnessError::Report {
        detail: e.to_string(),
    })?;
    Ok(canonical_hash(DOMAIN_SOLUTION, &bytes))
}

/// Write `report` as pretty JSON (newline-terminated) to `path`.
///
/// # Errors
///
/// Returns [`HarnessError::Io`] if the file cannot be written.
pub fn write_report(path: &Path, report: &RunReport) -> Result<(), HarnessError> {
    let mut text = report.to_json_pretty()?;
    text.push('\n');
    std::fs::write(path, text).map_err(|e| HarnessError::Io {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}
