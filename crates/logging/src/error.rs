//! crates/logging/src/error.rs
//! Errors reported by the fallible build path.

use std::io;
use std::path::PathBuf;

/// Failure to construct a logger from a [`LoggerConfig`](crate::LoggerConfig).
///
/// Only [`LoggerBuilder::try_build`](crate::LoggerBuilder::try_build) surfaces
/// this; every other constructor falls back to [`Logger::nop`](crate::Logger::nop).
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The configured output file could not be opened for appending.
    #[error("failed to open log output {}: {source}", path.display())]
    OpenOutput {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}
