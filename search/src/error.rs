//! Typed search errors.
//!
//! `SearchError` covers pre-flight policy failures and structural invariant
//! violations. Running out of states, budget, or time are not errors; they
//! are expressed via [`crate::termination::Termination`].

use std::fmt;

/// Typed failure for search setup and internal invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The policy cannot drive a search (returned before any step runs).
    InvalidPolicy { detail: String },
    /// A structural precondition was violated mid-search. Indicates a bug in
    /// the driver, never bad user input.
    Invariant { detail: String },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
            Self::Invariant { detail } => write!(f, "search invariant violated: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
