//! crates/logging-sink/src/level.rs
//! Integer-backed severities with fixed textual tags.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity understood by [`TagLogger`](crate::TagLogger), least severe first.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum Level {
    /// Diagnostic detail.
    Debug = 0,
    /// Routine progress.
    Info = 1,
    /// Something unexpected that does not stop the program.
    Warning = 2,
    /// A failed operation.
    Error = 3,
    /// An unrecoverable failure. Also the default threshold, so a logger
    /// built without one stays quiet until something fatal happens.
    #[default]
    Fatal = 4,
}

/// Failure to turn an integer or name into a [`Level`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum LevelError {
    /// The integer is outside `0..=4`.
    #[error("log level {0} is out of range (expected 0..=4)")]
    OutOfRange(u8),
    /// The name matches no tag.
    #[error("unknown log level: {0}")]
    UnknownName(String),
}

impl Level {
    /// Every level, in ascending order.
    pub const ALL: [Self; 5] = [
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Fatal,
    ];

    /// The literal tag rendered between brackets.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// The integer value of the level.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Level {
    type Error = LevelError;

    fn try_from(value: u8) -> Result<Self, LevelError> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(LevelError::OutOfRange(value))
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, LevelError> {
        let upper = s.trim().to_ascii_uppercase();
        match upper.as_str() {
            "WARNING" => Ok(Self::Warning),
            tag => Self::ALL
                .into_iter()
                .find(|level| level.tag() == tag)
                .ok_or_else(|| LevelError::UnknownName(s.to_owned())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
