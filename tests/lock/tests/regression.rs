//! Pinned solutions and statistics, and rejected inputs.

use pancake_kernel::gap::gap;
use pancake_kernel::stack::{Stack, StackError};
use pancake_search::{run, search, CostModel, NoopSink, Outcome, SearchPolicy, SearchStats};

fn steps(sizes: &[i64], model: CostModel) -> Vec<(usize, Vec<i64>)> {
    let Outcome::Solved(solution) = run(Stack::new(sizes.to_vec()).unwrap(), model).unwrap()
    else {
        panic!("{sizes:?} not solved");
    };
    solution
        .steps
        .iter()
        .map(|s| (s.flip_depth, s.stack.as_slice().to_vec()))
        .collect()
}

#[test]
fn default_stack_is_pinned() {
    let expected = vec![
        (2, vec![5, 4, 1, 3, 2, 6]),
        (5, vec![2, 3, 1, 4, 5, 6]),
        (2, vec![3, 2, 1, 4, 5, 6]),
        (3, vec![1, 2, 3, 4, 5, 6]),
    ];
    assert_eq!(steps(&[4, 5, 1, 3, 2, 6], CostModel::AStar), expected);
    assert_eq!(steps(&[4, 5, 1, 3, 2, 6], CostModel::UniformCost), expected);
}

#[test]
fn default_stack_statistics_are_pinned() {
    let stack = Stack::new(vec![4, 5, 1, 3, 2, 6]).unwrap();
    let astar = search(
        stack.clone(),
        &SearchPolicy::new(CostModel::AStar),
        &mut NoopSink,
    )
    .unwrap();
    assert_eq!(
        astar.stats,
        SearchStats {
            expansions: 24,
            generated: 96,
            inserted: 65,
            improved: 0,
            not_improved: 7,
            discarded_visited: 25,
            stale_skipped: 0,
            frontier_high_water: 41,
            nodes_retained: 25,
        }
    );

    let ucs = search(stack, &SearchPolicy::new(CostModel::UniformCost), &mut NoopSink).unwrap();
    assert_eq!(
        ucs.stats,
        SearchStats {
            expansions: 53,
            generated: 212,
            inserted: 102,
            improved: 5,
            not_improved: 37,
            discarded_visited: 69,
            stale_skipped: 1,
            frontier_high_water: 51,
            nodes_retained: 54,
        }
    );
}

#[test]
fn small_scenarios() {
    assert!(steps(&[1, 2, 3, 4], CostModel::AStar).is_empty());
    assert_eq!(steps(&[2, 1, 3], CostModel::AStar), vec![(2, vec![1, 2, 3])]);
    assert_eq!(
        steps(&[3, 1, 2, 4], CostModel::AStar),
        vec![(3, vec![2, 1, 3, 4]), (2, vec![1, 2, 3, 4])]
    );
    assert_eq!(
        steps(&[5, 4, 3, 2, 1, 6], CostModel::UniformCost),
        vec![(5, vec![1, 2, 3, 4, 5, 6])]
    );
}

#[test]
fn default_stack_gap() {
    assert_eq!(gap(&[4, 5, 1, 3, 2, 6]), 3);
    assert_eq!(gap(&[1, 2, 3, 4, 5, 6]), 0);
}

#[test]
fn rejected_inputs() {
    assert!(matches!(
        Stack::new(vec![3, 1, 2]),
        Err(StackError::PlateNotAtBottom { value: 3, plate: 2 })
    ));
    assert!(matches!(
        Stack::new(vec![1, 2, 4]),
        Err(StackError::NotConsecutive { .. })
    ));
    assert!(matches!(Stack::new(vec![]), Err(StackError::Empty)));
}
