//! Pancake Search: deterministic best-first search over pancake stacks.
//!
//! This crate provides the search layer. It depends only on
//! `pancake_kernel`; it does NOT depend on `pancake_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! pancake_kernel  ←  pancake_search  ←  pancake_harness
//! (stack, gap)       (frontier, nodes)   (cli, report)
//! ```
//!
//! # Key types
//!
//! - [`SearchNode`] -- immutable node with `(total_cost, order_added)` ordering
//! - [`Frontier`] -- binary heap with a state index and lazy invalidation
//! - [`NodeArena`] -- run-scoped storage of expanded nodes, addressed by handle
//! - [`SearchPolicy`] / [`CostModel`] -- A* or uniform-cost ordering, budgets
//! - [`DiagnosticSink`] -- injected tracing hook (no-op or `log`-backed)
//! - [`Searcher`] -- the `Ready → Running → terminal` state machine
//! - [`run`] -- one-call entry point returning [`Outcome`]

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod search;
pub mod sink;
pub mod solution;
pub mod termination;

pub use error::SearchError;
pub use frontier::Frontier;
pub use node::{FrontierKey, NodeArena, NodeHandle, SearchNode};
pub use policy::{CostModel, SearchPolicy};
pub use search::{search, SearchResult, Searcher};
pub use sink::{ChildDisposition, DiagnosticSink, LogSink, NoopSink};
pub use solution::{run, Outcome, Solution, Step};
pub use termination::{Phase, SearchStats, Termination};
