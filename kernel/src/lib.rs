//! Pancake Kernel: stack states, the flip transition, and the gap heuristic.
//!
//! # API Surface
//!
//! - [`stack::Stack::new`] -- validate raw sizes into a `Stack`
//! - [`stack::Stack::flip`] -- prefix reversal, producing a new `Stack`
//! - [`gap::gap`] -- breakpoint count, doubling as the goal test
//! - [`digest::hash::canonical_hash`] -- domain-separated SHA-256 digests
//!
//! # Module Dependency Direction
//!
//! `stack` ← `gap`, and `digest` stands alone.
//!
//! One-way only. `digest` knows nothing about stacks; callers serialize
//! first and hash the canonical bytes.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod digest;
pub mod gap;
pub mod stack;
