#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` is the tag-prefixed predecessor of the symbol-based
//! `logging` crate. A [`TagLogger`] writes `[TAG] message` lines to any
//! [`std::io::Write`] implementor, drops messages below its threshold
//! [`Level`], and can echo every line to standard output.
//!
//! # Design
//!
//! Levels are integers `0..=4` with fixed tags (`DEBUG`, `INFO`, `WARN`,
//! `ERROR`, `FATAL`); there is no symbol customisation. A single
//! process-wide lock serializes writes from every logger instance, so lines
//! from different loggers sharing one file never interleave.
//!
//! # Invariants
//!
//! - With [`LineMode::WithNewline`], a message gets exactly one trailing
//!   newline: one is appended when missing and none when already present.
//! - [`TagLogger::println`] and the `*ln` helpers always end the line,
//!   whatever the configured mode.
//! - The default threshold is [`Level::Fatal`].
//!
//! # Errors
//!
//! Emission never fails. Write errors from the underlying writer are
//! discarded; only [`TagLogger::flush`] reports them.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{Level, TagLogger};
//!
//! let logger = TagLogger::new(Vec::new(), Level::Info);
//! logger.debugf(format_args!("hidden"));
//! logger.infoln(&[&"listening on", &8080]);
//! logger.errorf(format_args!("lost connection to {}", "db-1"));
//!
//! let output = String::from_utf8(logger.into_inner()).unwrap();
//! assert_eq!(output, "[INFO] listening on 8080\n[ERROR] lost connection to db-1\n");
//! ```

mod guard;
mod level;
mod line_mode;
mod tag_logger;

pub use guard::LineModeGuard;
pub use level::{Level, LevelError};
pub use line_mode::LineMode;
pub use tag_logger::{TagLogger, render};
