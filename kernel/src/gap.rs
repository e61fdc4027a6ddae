//! The gap heuristic.
//!
//! A breakpoint is an adjacent pair whose sizes are not consecutive. The pair
//! touching the plate counts too, so the plate anchors the largest pancake.
//! A flip rewrites exactly one adjacency (the one at the spatula) and costs at
//! least two pancakes, so the count never overestimates the remaining cost
//! and never drops by more than one per flip.

/// Count breakpoints in `sizes`.
///
/// Zero iff `sizes` is the sorted target, given distinct consecutive sizes
/// with the maximum last. Empty and single-element slices have no pairs.
#[must_use]
pub fn gap(sizes: &[i64]) -> u64 {
    let count = sizes
        .windows(2)
        .filter(|w| w[0].abs_diff(w[1]) != 1)
        .count();
    count as u64
}
