//! Exhaustive references, computed without any priority queue.
//!
//! Every valid stack of a given size is enumerated and the cheapest cost to
//! the sorted stack is found by Bellman-Ford relaxation over all flips. The
//! fewest flips come from a breadth-first walk out of the sorted stack.
//! Flips are involutions, so the distance to sort `s` equals the distance
//! from the sorted stack to `s`.

use std::collections::{BTreeMap, VecDeque};

use pancake_kernel::stack::Stack;

/// Every valid stack of `len` pancakes over `1..=len`, plate last.
///
/// # Panics
///
/// Panics if `len` is zero.
#[must_use]
pub fn all_stacks(len: usize) -> Vec<Stack> {
    assert!(len > 0, "a stack needs at least the plate");
    let plate = i64::try_from(len).expect("len fits in i64");
    let mut out = Vec::new();
    let mut prefix: Vec<i64> = (1..plate).collect();
    permute(&mut prefix, 0, &mut |p| {
        let mut sizes = p.to_vec();
        sizes.push(plate);
        out.push(Stack::new(sizes).expect("permutation is a valid stack"));
    });
    out.sort();
    out
}

fn permute(items: &mut [i64], k: usize, emit: &mut dyn FnMut(&[i64])) {
    if k == items.len() {
        emit(items);
        return;
    }
    for i in k..items.len() {
        items.swap(k, i);
        permute(items, k + 1, emit);
        items.swap(k, i);
    }
}

/// Minimum backward cost to sort every stack of `len` pancakes.
///
/// # Panics
///
/// Panics if `len` is zero or relaxation fails to converge.
#[must_use]
pub fn reference_costs(len: usize) -> BTreeMap<Stack, u64> {
    let stacks = all_stacks(len);
    let mut cost: BTreeMap<Stack, u64> = stacks.iter().map(|s| (s.clone(), u64::MAX)).collect();
    cost.insert(Stack::sorted(len).expect("len > 0"), 0);

    // At most |V| - 1 rounds; one more proves convergence.
    for _ in 0..=stacks.len() {
        let mut changed = false;
        for s in &stacks {
            for depth in s.flip_depths() {
                let neighbour = s.flip(depth).expect("depth from flip_depths");
                let through = cost[&neighbour].saturating_add(depth as u64);
                if through < cost[s] {
                    cost.insert(s.clone(), through);
                    changed = true;
                }
            }
        }
        if !changed {
            return cost;
        }
    }
    panic!("relaxation did not converge for len {len}");
}

/// Fewest flips needed to sort every stack of `len` pancakes.
///
/// # Panics
///
/// Panics if `len` is zero.
#[must_use]
pub fn bfs_flip_counts(len: usize) -> BTreeMap<Stack, usize> {
    let goal = Stack::sorted(len).expect("a stack needs at least the plate");
    let mut flips = BTreeMap::from([(goal.clone(), 0)]);
    let mut queue = VecDeque::from([goal]);
    while let Some(s) = queue.pop_front() {
        let next = flips[&s] + 1;
        for depth in s.flip_depths() {
            let neighbour = s.flip(depth).expect("depth from flip_depths");
            if !flips.contains_key(&neighbour) {
                flips.insert(neighbour.clone(), next);
                queue.push_back(neighbour);
            }
        }
    }
    flips
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerates_factorial_many_stacks() {
        assert_eq!(all_stacks(1).len(), 1);
        assert_eq!(all_stacks(3).len(), 2);
        assert_eq!(all_stacks(5).len(), 24);
    }

    #[test]
    fn known_reference_costs() {
        let costs = reference_costs(4);
        let cost = |sizes: &[i64]| costs[&Stack::new(sizes.to_vec()).unwrap()];
        assert_eq!(cost(&[1, 2, 3, 4]), 0);
        assert_eq!(cost(&[3, 2, 1, 4]), 3);
        assert_eq!(cost(&[2, 3, 1, 4]), 5);
        assert_eq!(cost(&[1, 3, 2, 4]), 7);
    }

    #[test]
    fn every_stack_is_reachable() {
        assert!(reference_costs(5).values().all(|&c| c != u64::MAX));
        assert_eq!(bfs_flip_counts(5).len(), all_stacks(5).len());
    }

    #[test]
    fn known_flip_counts() {
        let flips = bfs_flip_counts(4);
        let count = |sizes: &[i64]| flips[&Stack::new(sizes.to_vec()).unwrap()];
        assert_eq!(count(&[1, 2, 3, 4]), 0);
        assert_eq!(count(&[3, 2, 1, 4]), 1);
        assert_eq!(count(&[2, 3, 1, 4]), 2);
        assert_eq!(count(&[1, 3, 2, 4]), 3);
    }
}
