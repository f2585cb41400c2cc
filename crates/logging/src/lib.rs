#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` builds opinionated, pre-configured [`tracing`] loggers for two
//! audiences: interactive command-line clients and long-running servers. It is
//! not a logging engine itself. Each [`Logger`] is a named handle around a
//! `tracing-subscriber` pipeline whose encoder, threshold and stack-trace
//! policy were chosen from three flags in [`Options`].
//!
//! # Design
//!
//! | `debug` | `server` | Preset |
//! |---|---|---|
//! | `true` | any | development: human-readable, [`Severity::Debug`] and above |
//! | `false` | `true` | production: JSON, [`Severity::Info`] and above |
//! | `false` | `false` | production with [`SymbolFormat`]: `<symbol> <message>` lines |
//!
//! The symbols used by [`SymbolFormat`] live in a [`SymbolTable`]. The
//! process-wide table behind [`active_symbols`] is shared by every logger the
//! factory builds, and the `set_*_symbol` functions update it; changes are
//! visible to every emission that starts after the setter returns. Tests and
//! embedders can inject an independent table through [`LoggerBuilder::symbols`].
//!
//! Loggers travel through call chains inside a [`Context`] via
//! [`with_logger`] and [`from_context`]; a missing binding resolves to
//! [`default_logger`].
//!
//! # Errors
//!
//! Logging never fails from the caller's point of view. Construction errors
//! are reported only by [`LoggerBuilder::try_build`]; every other constructor
//! substitutes [`Logger::nop`].
//!
//! # Examples
//!
//! ```
//! use logging::{Context, from_context, new_client_logger, with_logger};
//!
//! let logger = new_client_logger(false);
//! let ctx = with_logger(&Context::background(), logger.clone());
//!
//! let resolved = from_context(Some(&ctx));
//! assert!(resolved.ptr_eq(&logger));
//! resolved.info("You're awesome!");
//! ```

mod capture;
mod config;
mod context;
mod error;
mod factory;
mod filter;
mod logger;
mod render;
mod severity;
mod symbols;

pub use capture::MemoryWriter;
pub use config::{Encoding, LoggerConfig, Options, Output};
pub use context::{Context, from_context, with_logger};
pub use error::BuildError;
pub use factory::{
    DEFAULT_LOGGER_NAME, DEFAULT_NAME, LoggerBuilder, default_logger, new_client_logger,
    new_server_logger, new_with_options,
};
pub use filter::SeverityFilter;
pub use logger::Logger;
pub use render::{CONSOLE_SEPARATOR, SymbolFormat, encode_level};
pub use severity::{ParseSeverityError, Severity, targets};
pub use symbols::{
    DEFAULT_DEBUG_SYMBOL, DEFAULT_DPANIC_SYMBOL, DEFAULT_ERROR_SYMBOL, DEFAULT_FATAL_SYMBOL,
    DEFAULT_INFO_SYMBOL, DEFAULT_PANIC_SYMBOL, DEFAULT_WARN_SYMBOL, SymbolTable, active_symbols,
    set_debug_symbol, set_dpanic_symbol, set_error_symbol, set_fatal_symbol, set_info_symbol,
    set_panic_symbol, set_warn_symbol,
};
