//! Pancake Harness: command-line orchestration around the search.
//!
//! The harness parses and validates input, runs a timed search, and renders
//! the outcome as text or as a JSON run report with a content digest.
//!
//! The harness does NOT implement search logic. It delegates to
//! `pancake_search`, and hashing to `pancake_kernel`.
//!
//! # Pipeline
//!
//! ```text
//! parse_stack() → SearchPolicy::validate()
//!   → run_search() (timed) → render_lines() | RunReport::from_output()
//!   → write_report()
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod input;
pub mod logging;
pub mod render;
pub mod report;
pub mod runner;
