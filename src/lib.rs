#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # simplog
//!
//! Opinionated, pre-configured loggers for command-line clients and servers,
//! built on [`tracing`](https://docs.rs/tracing).
//!
//! Everything in the `logging` crate is re-exported at the root. The older
//! tag-prefixed design lives under [`tag`].
//!
//! ```
//! use simplog::{Context, from_context, new_client_logger, set_error_symbol, with_logger};
//!
//! set_error_symbol("[ERROR]");
//!
//! let logger = new_client_logger(false);
//! let ctx = with_logger(&Context::background(), logger);
//!
//! from_context(Some(&ctx)).error("Unable to operate, caffeine levels too low.");
//! # simplog::active_symbols().reset();
//! ```

pub use logging::*;

/// The tag-prefixed threshold logger that predates level symbols.
pub mod tag {
    pub use logging_sink::*;
}
