//! Harness errors and their process exit codes.

use std::fmt;
use std::path::PathBuf;

use pancake_kernel::stack::StackError;
use pancake_search::SearchError;

/// Exit status for input that failed validation.
pub const EXIT_INVALID_INPUT: u8 = 2;

/// Exit status for failures after a search started (report I/O, invariants).
pub const EXIT_FAILURE: u8 = 1;

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// A stack token is not an integer.
    ParseStack { token: String },
    /// The parsed sizes do not form a valid stack.
    InvalidStack(StackError),
    /// Policy validation or a search invariant failed.
    Search(SearchError),
    /// Building the run report failed (canonical JSON or serialization).
    Report { detail: String },
    /// Writing the run report failed.
    Io { path: PathBuf, detail: String },
}

impl HarnessError {
    /// Process exit status for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ParseStack { .. }
            | Self::InvalidStack(_)
            | Self::Search(SearchError::InvalidPolicy { .. }) => EXIT_INVALID_INPUT,
            Self::Search(SearchError::Invariant { .. }) | Self::Report { .. } | Self::Io { .. } => {
                EXIT_FAILURE
            }
        }
    }
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseStack { token } => {
                write!(f, "invalid stack: {token:?} is not an integer")
            }
            Self::InvalidStack(e) => write!(f, "invalid stack: {e}"),
            Self::Search(e) => write!(f, "{e}"),
            Self::Report { detail } => write!(f, "failed to build run report: {detail}"),
            Self::Io { path, detail } => {
                write!(f, "failed to write {}: {detail}", path.display())
            }
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidStack(e) => Some(e),
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StackError> for HarnessError {
    fn from(e: StackError) -> Self {
        Self::InvalidStack(e)
    }
}

impl From<SearchError> for HarnessError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}
