//! Search nodes, their ordering key, and the run-scoped node arena.

use std::ops::Index;

use pancake_kernel::stack::Stack;

/// Handle of an expanded node inside a [`NodeArena`].
///
/// Handles are only minted by [`NodeArena::push`], so a handle taken from a
/// node's `parent` always resolves in the arena of the same run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeHandle(usize);

impl NodeHandle {
    /// Position in the arena (also the pop order of the node).
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// An immutable search node.
///
/// Ordering for frontier extraction uses `(total_cost, order_added)` where
/// `total_cost = backward_cost + h_cost`. Lower is better; ties go to the
/// node created first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    /// The stack at this node.
    pub stack: Stack,
    /// Expanded node this one was reached from (`None` for root).
    pub parent: Option<NodeHandle>,
    /// Depth of the flip that produced this node (`None` for root).
    pub flip_depth: Option<usize>,
    /// Pancakes flipped along the path so far.
    pub backward_cost: u64,
    /// Heuristic estimate under the run's cost model (0 for uniform-cost).
    pub h_cost: u64,
    /// Global creation counter for deterministic tie-breaking.
    pub order_added: u64,
}

impl SearchNode {
    /// The root node: no parent, zero backward cost.
    #[must_use]
    pub fn root(stack: Stack, h_cost: u64, order_added: u64) -> Self {
        Self {
            stack,
            parent: None,
            flip_depth: None,
            backward_cost: 0,
            h_cost,
            order_added,
        }
    }

    /// A child reached from `parent` (stored at `parent_handle`) by a flip of
    /// `depth`, already applied to produce `stack`.
    #[must_use]
    pub fn child(
        parent_handle: NodeHandle,
        parent: &SearchNode,
        depth: usize,
        stack: Stack,
        h_cost: u64,
        order_added: u64,
    ) -> Self {
        Self {
            stack,
            parent: Some(parent_handle),
            flip_depth: Some(depth),
            backward_cost: parent.backward_cost + depth as u64,
            h_cost,
            order_added,
        }
    }

    /// `backward_cost + h_cost` (the frontier ordering cost).
    #[must_use]
    pub fn total_cost(&self) -> u64 {
        self.backward_cost.saturating_add(self.h_cost)
    }

    /// The frontier ordering key of this node.
    #[must_use]
    pub fn key(&self) -> FrontierKey {
        FrontierKey {
            total_cost: self.total_cost(),
            order_added: self.order_added,
        }
    }

    /// Whether this is a root node.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// The frontier ordering key: `(total_cost, order_added)`.
///
/// `order_added` is unique per run, so two keys are equal only if they
/// belong to the same node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrontierKey {
    pub total_cost: u64,
    pub order_added: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.total_cost
            .cmp(&other.total_cost)
            .then(self.order_added.cmp(&other.order_added))
    }
}

/// Run-scoped storage for expanded nodes.
///
/// Nodes enter the arena when popped from the frontier and are never
/// mutated afterwards. Parent links are handles into this arena, so the
/// whole forest is freed when the arena is dropped.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a node and return its handle.
    pub fn push(&mut self, node: SearchNode) -> NodeHandle {
        self.nodes.push(node);
        NodeHandle(self.nodes.len() - 1)
    }

    /// Look up a node by handle.
    #[must_use]
    pub fn get(&self, handle: NodeHandle) -> Option<&SearchNode> {
        self.nodes.get(handle.0)
    }

    /// Number of nodes stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in pop order.
    pub fn iter(&self) -> impl Iterator<Item = &SearchNode> {
        self.nodes.iter()
    }

    /// Walk parent links from `handle` to the root; returns root first.
    ///
    /// Returns an empty path for a handle outside this arena.
    #[must_use]
    pub fn path_to(&self, handle: NodeHandle) -> Vec<&SearchNode> {
        let mut path = Vec::new();
        let mut current = Some(handle);

        while let Some(h) = current {
            let Some(node) = self.get(h) else {
                return Vec::new();
            };
            path.push(node);
            current = node.parent;
        }

        path.reverse();
        path
    }
}

impl Index<NodeHandle> for NodeArena {
    type Output = SearchNode;

    fn index(&self, handle: NodeHandle) -> &SearchNode {
        &self.nodes[handle.0]
    }
}
