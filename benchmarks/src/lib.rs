//! Shared helpers for pancake benchmark suites.

use pancake_harness::report::RunReport;
use pancake_harness::runner::run_search;
use pancake_kernel::stack::Stack;
use pancake_search::{search, CostModel, NoopSink, SearchPolicy, SearchResult};

/// Named benchmark inputs, smallest first.
///
/// # Panics
///
/// Panics if a literal is not a valid stack. Benchmark setup failures are fatal.
#[must_use]
pub fn workload_stacks() -> Vec<(&'static str, Stack)> {
    let raw: [(&str, &[i64]); 4] = [
        ("n6_default", &[4, 5, 1, 3, 2, 6]),
        ("n7_mixed", &[6, 3, 5, 1, 4, 2, 7]),
        ("n8_reversed", &[7, 6, 5, 4, 3, 2, 1, 8]),
        ("n9_interleaved", &[2, 7, 4, 1, 8, 3, 6, 5, 9]),
    ];
    raw.into_iter()
        .map(|(name, sizes)| (name, Stack::new(sizes.to_vec()).expect("valid stack")))
        .collect()
}

/// Search only, with diagnostics discarded.
///
/// # Panics
///
/// Panics if the search fails.
#[must_use]
pub fn solve_quiet(stack: &Stack, cost_model: CostModel) -> SearchResult {
    search(stack.clone(), &SearchPolicy::new(cost_model), &mut NoopSink).expect("search")
}

/// Full harness path: timed search, run report, JSON bytes.
///
/// # Panics
///
/// Panics if the search or report fails.
#[must_use]
pub fn solve_to_report_json(stack: &Stack, cost_model: CostModel) -> Vec<u8> {
    let output = run_search(stack.clone(), &SearchPolicy::new(cost_model)).expect("run_search");
    let report = RunReport::from_output(&output).expect("report");
    serde_json::to_vec(&report).expect("serialize")
}
