//! Logger setup for the `pancake` binary.

use log::{LevelFilter, SetLoggerError};

/// Level for a `-v` count: warnings only, then debug, then trace.
#[must_use]
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install `pretty_env_logger` on stderr at the level for `verbosity`.
///
/// `RUST_LOG` directives, when set, are applied on top.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger is already installed.
pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level_for(verbosity));
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.try_init()
}
