//! crates/logging/src/logger.rs
//! The logger handle returned by every constructor.
//!
//! A [`Logger`] wraps a [`Dispatch`] built by the factory together with a span
//! naming the component that created it. Each emission installs the dispatch
//! as the thread's default for the duration of a single event, so loggers
//! with different configurations coexist in one process without touching the
//! global subscriber.

use std::backtrace::Backtrace;
use std::fmt;
use std::sync::Arc;

use tracing::dispatcher::{self, DefaultGuard, Dispatch};
use tracing::{Level, Span};

use crate::config::LoggerConfig;
use crate::severity::{Severity, targets};

/// Emits one event at `$severity` with the remaining `tracing` field/format tokens.
macro_rules! emit_event {
    ($severity:expr, $($arg:tt)+) => {
        match $severity {
            Severity::Debug => tracing::event!(target: targets::DEFAULT, Level::DEBUG, $($arg)+),
            Severity::Info => tracing::event!(target: targets::DEFAULT, Level::INFO, $($arg)+),
            Severity::Warn => tracing::event!(target: targets::DEFAULT, Level::WARN, $($arg)+),
            Severity::Error => tracing::event!(target: targets::DEFAULT, Level::ERROR, $($arg)+),
            Severity::DPanic => tracing::event!(target: targets::DPANIC, Level::ERROR, $($arg)+),
            Severity::Panic => tracing::event!(target: targets::PANIC, Level::ERROR, $($arg)+),
            Severity::Fatal => tracing::event!(target: targets::FATAL, Level::ERROR, $($arg)+),
        }
    };
}

/// Generates the three emission styles for each severity.
macro_rules! severity_methods {
    ($($severity:ident => $plain:ident, $line:ident, $formatted:ident;)+) => {
        $(
            #[doc = concat!("Logs a pre-formatted message at [`Severity::", stringify!($severity), "`].")]
            pub fn $plain(&self, message: impl fmt::Display) {
                self.log(Severity::$severity, message);
            }

            #[doc = concat!("Logs space-joined values at [`Severity::", stringify!($severity), "`].")]
            pub fn $line(&self, values: &[&dyn fmt::Display]) {
                self.logln(Severity::$severity, values);
            }

            #[doc = concat!("Logs a `format_args!` template at [`Severity::", stringify!($severity), "`].")]
            pub fn $formatted(&self, args: fmt::Arguments<'_>) {
                self.logf(Severity::$severity, args);
            }
        )+
    };
}

/// A configured, named logger.
///
/// Cloning is cheap and clones share identity; see [`Logger::ptr_eq`].
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
}

struct Inner {
    name: String,
    development: bool,
    stacktrace_level: Option<Severity>,
    pipeline: Option<Pipeline>,
}

struct Pipeline {
    dispatch: Dispatch,
    span: Span,
    level: Severity,
}

impl Logger {
    pub(crate) fn from_dispatch(name: &str, dispatch: Dispatch, config: &LoggerConfig) -> Self {
        let span = name_span(&dispatch, name);
        Self {
            inner: Arc::new(Inner {
                name: name.to_owned(),
                development: config.development,
                stacktrace_level: config.effective_stacktrace_level(),
                pipeline: Some(Pipeline {
                    dispatch,
                    span,
                    level: config.level,
                }),
            }),
        }
    }

    /// A logger that discards every message.
    ///
    /// [`Severity::Panic`] and [`Severity::Fatal`] still panic and exit.
    #[must_use]
    pub fn nop() -> Self {
        Self {
            inner: Arc::new(Inner {
                name: String::new(),
                development: false,
                stacktrace_level: None,
                pipeline: None,
            }),
        }
    }

    /// Name attached to every line this logger emits.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Threshold severity, or `None` for a no-op logger.
    #[must_use]
    pub fn level(&self) -> Option<Severity> {
        self.inner.pipeline.as_ref().map(|pipeline| pipeline.level)
    }

    /// Reports whether this logger discards everything.
    #[must_use]
    pub fn is_nop(&self) -> bool {
        self.inner.pipeline.is_none()
    }

    /// Reports whether both handles refer to the same logger.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// The underlying dispatcher, for use with `tracing::dispatcher` directly.
    #[must_use]
    pub fn dispatch(&self) -> Option<&Dispatch> {
        self.inner.pipeline.as_ref().map(|pipeline| &pipeline.dispatch)
    }

    /// Reports whether an emission at `severity` would be written.
    #[must_use]
    pub fn enabled(&self, severity: Severity) -> bool {
        self.level().is_some_and(|threshold| severity >= threshold)
    }

    /// Returns a logger sharing this pipeline under the name `<name>.<child>`.
    #[must_use]
    pub fn named(&self, child: &str) -> Self {
        let name = match (self.inner.name.as_str(), child) {
            ("", child) => child.to_owned(),
            (parent, "") => parent.to_owned(),
            (parent, child) => format!("{parent}.{child}"),
        };

        let pipeline = self.inner.pipeline.as_ref().map(|pipeline| Pipeline {
            dispatch: pipeline.dispatch.clone(),
            span: name_span(&pipeline.dispatch, &name),
            level: pipeline.level,
        });

        Self {
            inner: Arc::new(Inner {
                name,
                development: self.inner.development,
                stacktrace_level: self.inner.stacktrace_level,
                pipeline,
            }),
        }
    }

    /// Routes plain `tracing` macros on this thread through this logger until
    /// the guard is dropped.
    #[must_use = "dropping the guard immediately restores the previous dispatcher"]
    pub fn set_default(&self) -> DefaultGuard {
        match &self.inner.pipeline {
            Some(pipeline) => dispatcher::set_default(&pipeline.dispatch),
            None => dispatcher::set_default(&Dispatch::none()),
        }
    }

    /// Logs a pre-formatted message at `severity`.
    pub fn log(&self, severity: Severity, message: impl fmt::Display) {
        self.emit(severity, &message.to_string());
    }

    /// Logs `values` joined by single spaces at `severity`.
    pub fn logln(&self, severity: Severity, values: &[&dyn fmt::Display]) {
        let message = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        self.emit(severity, &message);
    }

    /// Logs a formatted template at `severity`.
    pub fn logf(&self, severity: Severity, args: fmt::Arguments<'_>) {
        self.emit(severity, &fmt::format(args));
    }

    severity_methods! {
        Debug => debug, debugln, debugf;
        Info => info, infoln, infof;
        Warn => warn, warnln, warnf;
        Error => error, errorln, errorf;
        DPanic => dpanic, dpanicln, dpanicf;
        Panic => panic, panicln, panicf;
        Fatal => fatal, fatalln, fatalf;
    }

    fn emit(&self, severity: Severity, message: &str) {
        if let Some(pipeline) = self
            .inner
            .pipeline
            .as_ref()
            .filter(|pipeline| severity >= pipeline.level)
        {
            dispatcher::with_default(&pipeline.dispatch, || {
                let _entered = pipeline.span.enter();
                if self.captures_stacktrace(severity) {
                    let stacktrace = Backtrace::force_capture();
                    emit_event!(severity, stacktrace = %stacktrace, "{}", message);
                } else {
                    emit_event!(severity, "{}", message);
                }
            });
        }

        self.escalate(severity, message);
    }

    fn captures_stacktrace(&self, severity: Severity) -> bool {
        self.inner
            .stacktrace_level
            .is_some_and(|threshold| severity >= threshold)
    }

    fn escalate(&self, severity: Severity, message: &str) {
        match severity {
            Severity::DPanic if self.inner.development => panic!("{message}"),
            Severity::Panic => panic!("{message}"),
            Severity::Fatal => std::process::exit(1),
            _ => {}
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        crate::factory::default_logger()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.inner.name)
            .field("level", &self.level())
            .field("development", &self.inner.development)
            .field("stacktrace_level", &self.inner.stacktrace_level)
            .finish_non_exhaustive()
    }
}

fn name_span(dispatch: &Dispatch, name: &str) -> Span {
    dispatcher::with_default(dispatch, || {
        tracing::error_span!(target: targets::DEFAULT, "logger", logger = %name)
    })
}
