//! `pancake`: sort a stack of pancakes with as few flipped pancakes as possible.
//!
//! Usage: `pancake [-v...] [--strategy astar|uniform-cost] [--max-expansions N]
//! [--json] [--report PATH] [STACK...]`
//!
//! Exit codes: 0 when the search completed (solved or not), 2 for invalid
//! input, 1 when the report could not be written.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};

use pancake_harness::error::HarnessError;
use pancake_harness::input::parse_stack;
use pancake_harness::logging;
use pancake_harness::render::render_lines;
use pancake_harness::report::{write_report, RunReport};
use pancake_harness::runner::run_search;
use pancake_search::{CostModel, SearchPolicy};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Pancake sizes from top to bottom. The largest is the plate and must
    /// come last. Default: 4 5 1 3 2 6
    #[arg(value_name = "STACK", allow_negative_numbers = true)]
    stack: Vec<String>,

    /// Increase verbosity (-v: search progress, -vv: every flip)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Frontier ordering
    #[arg(long, default_value_t = CostModel::AStar)]
    strategy: CostModel,

    /// Give up after this many expansions
    #[arg(long, value_name = "N")]
    max_expansions: Option<u64>,

    /// Print the run report as JSON instead of the step list
    #[arg(long)]
    json: bool,

    /// Also write the JSON run report to this file
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("warning: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), HarnessError> {
    let initial = parse_stack(&cli.stack)?;
    let policy = SearchPolicy {
        cost_model: cli.strategy,
        max_expansions: cli.max_expansions,
    };
    policy.validate()?;

    let output = run_search(initial, &policy)?;
    let report = RunReport::from_output(&output)?;

    if cli.json {
        println!("{}", report.to_json_pretty()?);
    } else {
        for line in render_lines(&output) {
            println!("{line}");
        }
    }

    if let Some(path) = &cli.report {
        write_report(path, &report)?;
    }
    Ok(())
}
