//! Both cost models return minimum-cost solutions, checked against an
//! exhaustive reference that uses no priority queue.

use lock_tests::reference::{all_stacks, bfs_flip_counts, reference_costs};
use pancake_kernel::stack::Stack;
use pancake_search::{run, CostModel, Outcome, Solution};

fn solve(stack: &Stack, model: CostModel) -> Solution {
    match run(stack.clone(), model).unwrap() {
        Outcome::Solved(solution) => solution,
        Outcome::Exhausted => panic!("{stack} exhausted under {model}"),
    }
}

fn assert_valid_path(solution: &Solution) {
    let mut current = solution.initial.clone();
    let mut cost = 0u64;
    for step in &solution.steps {
        current = current.flip(step.flip_depth).unwrap();
        assert_eq!(current, step.stack, "step does not follow from its parent");
        cost += step.flip_depth as u64;
    }
    assert!(current.is_sorted(), "path ends at {current}");
    assert_eq!(cost, solution.total_cost);
}

#[test]
fn every_stack_up_to_five_is_solved_optimally() {
    for len in 1..=5 {
        let reference = reference_costs(len);
        for stack in all_stacks(len) {
            for model in [CostModel::AStar, CostModel::UniformCost] {
                let solution = solve(&stack, model);
                assert_valid_path(&solution);
                assert_eq!(
                    solution.total_cost, reference[&stack],
                    "{stack} under {model}"
                );
            }
        }
    }
}

#[test]
fn every_stack_up_to_five_uses_fewest_flips() {
    for len in 1..=5 {
        let fewest = bfs_flip_counts(len);
        for stack in all_stacks(len) {
            for model in [CostModel::AStar, CostModel::UniformCost] {
                assert_eq!(
                    solve(&stack, model).flip_count(),
                    fewest[&stack],
                    "{stack} under {model}"
                );
            }
        }
    }
}

/// From six pancakes on, the cheapest sequence can need more flips than the
/// shortest one.
#[test]
fn cost_and_flip_count_diverge_at_six() {
    let fewest = bfs_flip_counts(6);
    let costs = reference_costs(6);
    let longer: Vec<Stack> = all_stacks(6)
        .into_iter()
        .filter(|s| solve(s, CostModel::AStar).flip_count() > fewest[s])
        .collect();
    assert_eq!(longer.len(), 5);

    let stack = Stack::new(vec![5, 3, 4, 1, 2, 6]).unwrap();
    assert!(longer.contains(&stack));
    let solution = solve(&stack, CostModel::AStar);
    let depths: Vec<usize> = solution.steps.iter().map(|s| s.flip_depth).collect();
    assert_eq!(depths, vec![2, 3, 2, 5, 2]);
    assert_eq!(solution.total_cost, 14);
    assert_eq!(solution.total_cost, costs[&stack]);
    assert_eq!(fewest[&stack], 4);
}

#[test]
fn valid_inputs_always_solve() {
    for sizes in [
        vec![1],
        vec![-3, -2],
        vec![0, -1, 1],
        vec![10, 12, 11, 13],
        vec![4, 5, 1, 3, 2, 6],
        vec![6, 3, 5, 1, 4, 2, 7],
    ] {
        let stack = Stack::new(sizes).unwrap();
        assert_valid_path(&solve(&stack, CostModel::AStar));
    }
}
