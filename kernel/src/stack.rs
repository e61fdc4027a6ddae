//! `Stack`: a validated pancake stack, top first, plate last.
//!
//! # Equality semantics
//!
//! Two stacks are equal iff their sizes are equal position by position.
//! `Stack` derives `Ord` and `Hash` so search layers can key ordered maps
//! and sets by state directly.
//!
//! # Immutability
//!
//! There is no `&mut` access to the sizes. [`Stack::flip`] always returns a
//! fresh `Stack`, so a state stored in one search node can never be changed
//! through a sibling branch.

use std::fmt;
use std::ops::Range;

use crate::gap::gap;

/// Smallest legal flip depth. Flipping a single pancake is a no-op.
pub const MIN_FLIP_DEPTH: usize = 2;

/// Typed failure for stack validation. Fail-closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    /// No sizes were given.
    Empty,
    /// Some pancake is larger than the last element (the plate).
    PlateNotAtBottom { value: i64, plate: i64 },
    /// Sorted sizes do not form a contiguous range (duplicates or gaps).
    NotConsecutive { values: Vec<i64> },
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "the stack is empty"),
            Self::PlateNotAtBottom { value, plate } => write!(
                f,
                "the plate (the largest number) must be at the bottom: {value} is larger than {plate}"
            ),
            Self::NotConsecutive { values } => write!(
                f,
                "pancake sizes must be distinct consecutive integers, got {}",
                fmt_sizes(values)
            ),
        }
    }
}

impl std::error::Error for StackError {}

/// Typed failure for the flip transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipError {
    /// Depth outside `[2, len - 1]`.
    DepthOutOfRange { depth: usize, len: usize },
}

impl fmt::Display for FlipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthOutOfRange { depth, len } => write!(
                f,
                "flip depth {depth} out of range for a stack of {len} (legal: {MIN_FLIP_DEPTH}..{len})"
            ),
        }
    }
}

impl std::error::Error for FlipError {}

/// A validated stack of pancakes.
///
/// Invariants (enforced by [`Stack::new`]):
/// - at least one element;
/// - the last element is the maximum (the plate);
/// - the sizes, once sorted, are consecutive integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Stack {
    pancakes: Vec<i64>,
}

impl Stack {
    /// Validate raw sizes, top of the stack first.
    ///
    /// Checks run in order (empty, plate, consecutive) and the first
    /// failure is returned.
    ///
    /// # Errors
    ///
    /// Returns [`StackError`] describing the first violated invariant.
    pub fn new(pancakes: Vec<i64>) -> Result<Self, StackError> {
        let Some(&plate) = pancakes.last() else {
            return Err(StackError::Empty);
        };
        if let Some(&value) = pancakes.iter().find(|&&p| p > plate) {
            return Err(StackError::PlateNotAtBottom { value, plate });
        }

        let mut sorted = pancakes.clone();
        sorted.sort_unstable();
        let consecutive = sorted
            .windows(2)
            .all(|w| w[0].checked_add(1) == Some(w[1]));
        if !consecutive {
            return Err(StackError::NotConsecutive { values: sorted });
        }

        Ok(Self { pancakes })
    }

    /// The sorted stack `1, 2, ..., len`.
    ///
    /// `None` if `len` is zero or the plate size does not fit in `i64`.
    #[must_use]
    pub fn sorted(len: usize) -> Option<Self> {
        let plate = i64::try_from(len).ok().filter(|&p| p > 0)?;
        Some(Self {
            pancakes: (1..=plate).collect(),
        })
    }

    /// Number of elements, plate included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pancakes.len()
    }

    /// Always `false`: a validated stack holds at least the plate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pancakes.is_empty()
    }

    /// The sizes, top first.
    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.pancakes
    }

    /// The plate (last and largest element).
    #[must_use]
    pub fn plate(&self) -> i64 {
        self.pancakes[self.pancakes.len() - 1]
    }

    /// Legal flip depths: `2..len`. Empty for stacks of two or fewer.
    #[must_use]
    pub fn flip_depths(&self) -> Range<usize> {
        MIN_FLIP_DEPTH..self.len().max(MIN_FLIP_DEPTH)
    }

    /// Reverse the top `depth` pancakes, returning a new stack.
    ///
    /// The plate never moves, so `depth` must lie in `[2, len - 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`FlipError::DepthOutOfRange`] for any other depth.
    pub fn flip(&self, depth: usize) -> Result<Self, FlipError> {
        if !self.flip_depths().contains(&depth) {
            return Err(FlipError::DepthOutOfRange {
                depth,
                len: self.len(),
            });
        }
        let mut pancakes = self.pancakes.clone();
        pancakes[..depth].reverse();
        Ok(Self { pancakes })
    }

    /// Breakpoint count; see [`gap`].
    #[must_use]
    pub fn gap(&self) -> u64 {
        gap(&self.pancakes)
    }

    /// Goal test: no breakpoints left.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.gap() == 0
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&fmt_sizes(&self.pancakes))
    }
}

fn fmt_sizes(sizes: &[i64]) -> String {
    let inner: Vec<String> = sizes.iter().map(ToString::to_string).collect();
    format!("[{}]", inner.join(", "))
}
