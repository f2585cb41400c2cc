//! crates/logging/src/severity.rs
//! Severity levels and their mapping onto `tracing` metadata.

use std::fmt;
use std::str::FromStr;

use tracing::{Level, Metadata};

/// Event targets used to tell apart the severities that share [`Level::ERROR`].
pub mod targets {
    /// Target for debug, info, warn and error emissions.
    pub const DEFAULT: &str = "simplog";
    /// Target for development-panic emissions.
    pub const DPANIC: &str = "simplog::dpanic";
    /// Target for panic emissions.
    pub const PANIC: &str = "simplog::panic";
    /// Target for fatal emissions.
    pub const FATAL: &str = "simplog::fatal";
}

/// Log severity, ordered from least to most severe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Verbose diagnostics, usually disabled in production.
    Debug,
    /// Default severity for informational messages.
    Info,
    /// Something unexpected that does not stop the program.
    Warn,
    /// A failure the program can still recover from.
    Error,
    /// Panics after logging, but only in development loggers.
    DPanic,
    /// Panics after logging.
    Panic,
    /// Exits the process after logging.
    Fatal,
}

impl Severity {
    /// Every severity, in ascending order.
    pub const ALL: [Self; 7] = [
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::DPanic,
        Self::Panic,
        Self::Fatal,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::DPanic => "dpanic",
            Self::Panic => "panic",
            Self::Fatal => "fatal",
        }
    }

    /// The `tracing` level events of this severity are emitted at.
    #[must_use]
    pub const fn tracing_level(self) -> Level {
        match self {
            Self::Debug => Level::DEBUG,
            Self::Info => Level::INFO,
            Self::Warn => Level::WARN,
            Self::Error | Self::DPanic | Self::Panic | Self::Fatal => Level::ERROR,
        }
    }

    /// The event target events of this severity are emitted with.
    #[must_use]
    pub const fn target(self) -> &'static str {
        match self {
            Self::Debug | Self::Info | Self::Warn | Self::Error => targets::DEFAULT,
            Self::DPanic => targets::DPANIC,
            Self::Panic => targets::PANIC,
            Self::Fatal => targets::FATAL,
        }
    }

    /// Recovers the severity of an event from its metadata.
    ///
    /// Events recorded by foreign `tracing` macros map by level alone, with
    /// `TRACE` folded into [`Severity::Debug`].
    #[must_use]
    pub fn from_metadata(metadata: &Metadata<'_>) -> Self {
        match *metadata.level() {
            Level::TRACE | Level::DEBUG => Self::Debug,
            Level::INFO => Self::Info,
            Level::WARN => Self::Warn,
            Level::ERROR => match metadata.target() {
                targets::DPANIC => Self::DPanic,
                targets::PANIC => Self::Panic,
                targets::FATAL => Self::Fatal,
                _ => Self::Error,
            },
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown severity name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity: {0}")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "dpanic" => Ok(Self::DPanic),
            "panic" => Ok(Self::Panic),
            "fatal" => Ok(Self::Fatal),
            _ => Err(ParseSeverityError(s.to_owned())),
        }
    }
}
