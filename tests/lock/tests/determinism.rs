//! Identical inputs give identical solutions and counters, in one process
//! and across processes with different environments.

use std::path::Path;
use std::process::Command;

use pancake_kernel::stack::Stack;
use pancake_search::{search, CostModel, NoopSink, SearchPolicy};

fn run_fixture(args: &[&str], work_dir: &Path, env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_solve_fixture");
    let mut command = Command::new(bin);
    command
        .args(args)
        .current_dir(work_dir)
        .env_remove("RUST_LOG")
        .env_remove("LC_ALL")
        .env_remove("LANG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "solve_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn in_process_runs_are_identical() {
    let stack = Stack::new(vec![6, 3, 5, 1, 4, 2, 7]).unwrap();
    for model in [CostModel::AStar, CostModel::UniformCost] {
        let policy = SearchPolicy::new(model);
        let first = search(stack.clone(), &policy, &mut NoopSink).unwrap();
        for _ in 0..3 {
            let again = search(stack.clone(), &policy, &mut NoopSink).unwrap();
            assert_eq!(first.solution(), again.solution());
            assert_eq!(first.stats, again.stats);
            assert_eq!(first.arena.len(), again.arena.len());
            let popped = |r: &pancake_search::SearchResult| {
                r.arena.iter().map(|n| n.stack.clone()).collect::<Vec<_>>()
            };
            assert_eq!(popped(&first), popped(&again), "pop order differs");
        }
    }
}

#[test]
fn crossproc_output_is_identical_under_env_variants() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let tmp = std::env::temp_dir();
    let args = ["astar", "6", "3", "5", "1", "4", "2", "7"];

    let baseline = run_fixture(&args, root, &[]);
    assert!(baseline.contains("outcome=solved"));
    assert!(baseline.contains("flip_depths=6,2,4,5,2,4"));
    assert!(baseline.contains("total_cost=23"));
    assert!(baseline.contains("solution_digest=sha256:"));

    let variants: [(&Path, &[(&str, &str)]); 3] = [
        (&tmp, &[]),
        (root, &[("LC_ALL", "C")]),
        (root, &[("LANG", "tr_TR.UTF-8"), ("TZ", "Pacific/Kiritimati")]),
    ];
    for (dir, env) in variants {
        assert_eq!(
            run_fixture(&args, dir, env),
            baseline,
            "output differs (dir={}, env={env:?})",
            dir.display()
        );
    }
}

#[test]
fn crossproc_strategies_agree_on_cost_but_not_digest() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let astar = run_fixture(&["astar"], root, &[]);
    let ucs = run_fixture(&["uniform-cost"], root, &[]);

    let field = |out: &str, key: &str| -> String {
        out.lines()
            .find_map(|l| l.strip_prefix(&format!("{key}=")).map(str::to_string))
            .unwrap_or_else(|| panic!("missing {key} in {out}"))
    };
    assert_eq!(field(&astar, "total_cost"), "12");
    assert_eq!(field(&ucs, "total_cost"), "12");
    assert_eq!(field(&astar, "flip_depths"), field(&ucs, "flip_depths"));
    assert_eq!(
        field(&astar, "initial_fingerprint"),
        field(&ucs, "initial_fingerprint")
    );
    assert_ne!(
        field(&astar, "solution_digest"),
        field(&ucs, "solution_digest")
    );
    assert_eq!(field(&astar, "expansions"), "24");
    assert_eq!(field(&ucs, "expansions"), "53");
}
