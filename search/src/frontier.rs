//! Best-first frontier with in-place improvement.
//!
//! A `BinaryHeap` gives O(log n) pops but no decrease-key, so the frontier
//! pairs it with a `BTreeMap` index from state to the key of the one live
//! entry for that state. Superseded heap entries stay behind and are
//! discarded when they surface (lazy invalidation). `BTreeMap` rather than
//! `HashMap` keeps iteration order deterministic.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use pancake_kernel::stack::Stack;

use crate::node::{FrontierKey, SearchNode};

/// A frontier entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest `total_cost` first).
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node: SearchNode,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Priority frontier of discovered-but-unexpanded nodes.
///
/// Maintains:
/// - A `BinaryHeap` of entries, possibly including superseded ones
/// - A `BTreeMap<Stack, FrontierKey>` naming the live entry per state
///
/// Invariant: at most one live entry per state. An entry is live iff the
/// index maps its state to its key.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    live: BTreeMap<Stack, FrontierKey>,
    high_water: u64,
    stale_skipped: u64,
}

impl Frontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node whose state is not yet in the frontier.
    ///
    /// Returns `false` (node not added) if the state already has a live
    /// entry; use [`Frontier::try_improve`] for that case.
    pub fn insert(&mut self, node: SearchNode) -> bool {
        if self.live.contains_key(&node.stack) {
            return false;
        }
        let key = node.key();
        self.live.insert(node.stack.clone(), key);
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node,
        });
        self.bump_high_water();
        true
    }

    /// Remove and return the live node with the smallest key.
    ///
    /// `None` means the frontier is empty.
    #[must_use]
    pub fn pop_min(&mut self) -> Option<SearchNode> {
        while let Some(entry) = self.heap.pop() {
            if self.is_live(&entry) {
                self.live.remove(&entry.node.stack);
                return Some(entry.node);
            }
            self.stale_skipped += 1;
        }
        None
    }

    /// The live node that [`Frontier::pop_min`] would return next.
    ///
    /// Takes `&mut self` because stale entries on top are discarded.
    pub fn peek_min(&mut self) -> Option<&SearchNode> {
        loop {
            let top_is_live = {
                let top = self.heap.peek()?;
                self.is_live(top)
            };
            if top_is_live {
                break;
            }
            self.heap.pop();
            self.stale_skipped += 1;
        }
        self.heap.peek().map(|e| &e.node)
    }

    /// Whether some live entry holds exactly this state.
    #[must_use]
    pub fn contains_state(&self, stack: &Stack) -> bool {
        self.live.contains_key(stack)
    }

    /// Replace the live entry for `node.stack` if `node` is strictly cheaper.
    ///
    /// Returns `true` if the entry was replaced. A no-op (returning `false`)
    /// when the state is not in the frontier or `node` is not cheaper.
    pub fn try_improve(&mut self, node: SearchNode) -> bool {
        let key = node.key();
        match self.live.get_mut(&node.stack) {
            Some(existing) if key.total_cost < existing.total_cost => {
                *existing = key;
                self.heap.push(FrontierEntry {
                    key: Reverse(key),
                    node,
                });
                true
            }
            _ => false,
        }
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether no live entries remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// States with a live entry, in `Stack` order.
    pub fn live_states(&self) -> impl Iterator<Item = &Stack> {
        self.live.keys()
    }

    /// High-water mark of live entries.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Superseded entries discarded so far.
    #[must_use]
    pub fn stale_skipped(&self) -> u64 {
        self.stale_skipped
    }

    /// Heap entries that are still live, counted per state.
    #[cfg(test)]
    pub(crate) fn live_heap_entries(&self) -> BTreeMap<&Stack, usize> {
        let mut counts = BTreeMap::new();
        for entry in self.heap.iter().filter(|e| self.is_live(e)) {
            *counts.entry(&entry.node.stack).or_insert(0) += 1;
        }
        counts
    }

    fn is_live(&self, entry: &FrontierEntry) -> bool {
        self.live.get(&entry.node.stack) == Some(&entry.key.0)
    }

    fn bump_high_water(&mut self) {
        let size = self.live.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }
}
