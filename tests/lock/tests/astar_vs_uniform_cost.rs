//! The gap heuristic changes how much is explored, never the cost found.

use lock_tests::reference::all_stacks;
use pancake_search::{search, CostModel, NoopSink, SearchPolicy, SearchResult};

fn solve(stack: &pancake_kernel::stack::Stack, model: CostModel) -> SearchResult {
    let result = search(stack.clone(), &SearchPolicy::new(model), &mut NoopSink).unwrap();
    assert!(result.is_solved(), "{stack} not solved under {model}");
    result
}

#[test]
fn equal_cost_and_fewer_pops_with_heuristic() {
    for len in 1..=6 {
        for stack in all_stacks(len) {
            let astar = solve(&stack, CostModel::AStar);
            let ucs = solve(&stack, CostModel::UniformCost);

            let astar_cost = astar.goal().unwrap().backward_cost;
            let ucs_cost = ucs.goal().unwrap().backward_cost;
            assert_eq!(astar_cost, ucs_cost, "{stack}");
            assert!(
                astar.stats.nodes_retained <= ucs.stats.nodes_retained,
                "{stack}: A* popped {} > uniform-cost {}",
                astar.stats.nodes_retained,
                ucs.stats.nodes_retained
            );
        }
    }
}

#[test]
fn heuristic_search_never_improves_frontier_entries_on_default_stack() {
    let stack = pancake_kernel::stack::Stack::new(vec![4, 5, 1, 3, 2, 6]).unwrap();
    let astar = solve(&stack, CostModel::AStar);
    let ucs = solve(&stack, CostModel::UniformCost);
    assert_eq!(astar.stats.improved, 0);
    assert_eq!(ucs.stats.improved, 5);
    assert!(astar.stats.expansions < ucs.stats.expansions);
}
