//! Binary that solves one stack and prints deterministic output lines for
//! cross-process verification.
//!
//! Usage: `solve_fixture [STRATEGY [SIZE...]]`
//! (defaults: `astar` and the default stack)
//!
//! Output: key=value lines (see source for format). Timing is omitted.

use pancake_harness::input::parse_stack;
use pancake_harness::report::RunReport;
use pancake_harness::runner::run_search;
use pancake_kernel::digest::hash::stack_fingerprint;
use pancake_search::{CostModel, SearchPolicy};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (strategy, sizes) = match args.split_first() {
        Some((first, rest)) => (first.parse::<CostModel>().expect("valid strategy"), rest),
        None => (CostModel::AStar, &args[..]),
    };

    let initial = parse_stack(sizes).expect("valid stack");
    let fingerprint = stack_fingerprint(initial.as_slice());
    let output = run_search(initial, &SearchPolicy::new(strategy)).expect("search run failed");
    let report = RunReport::from_output(&output).expect("report builds");

    let depths: Vec<String> = report
        .steps
        .iter()
        .map(|s| s.flip_depth.to_string())
        .collect();

    println!("strategy={}", report.strategy);
    println!("initial_fingerprint={}", fingerprint.as_str());
    println!("outcome={}", report.outcome);
    println!("flip_depths={}", depths.join(","));
    println!(
        "total_cost={}",
        report.total_cost.map_or_else(|| "none".into(), |c| c.to_string())
    );
    println!("expansions={}", report.stats.expansions);
    println!("generated={}", report.stats.generated);
    println!("frontier_high_water={}", report.stats.frontier_high_water);
    println!(
        "solution_digest={}",
        report.solution_digest.as_deref().unwrap_or("none")
    );
}
