//! crates/logging/src/factory.rs
//! Logger construction: the builder and the opinionated shortcuts.

use std::fmt;
use std::fs::OpenOptions;
use std::io;
use std::sync::{Mutex, OnceLock};

use tracing::Dispatch;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Layer, SubscriberExt};

use crate::config::{Encoding, LoggerConfig, Options, Output};
use crate::error::BuildError;
use crate::filter::SeverityFilter;
use crate::logger::Logger;
use crate::render::SymbolFormat;
use crate::symbols::{SymbolTable, active_symbols};

/// Name given to loggers built through [`new_with_options`] and friends.
pub const DEFAULT_NAME: &str = "simplog";

/// Name given to the process-default logger.
pub const DEFAULT_LOGGER_NAME: &str = "simplog-default";

/// Step-by-step logger construction with injectable collaborators.
///
/// ```
/// use logging::{LoggerBuilder, MemoryWriter, Options, Severity, SymbolTable};
///
/// let symbols = SymbolTable::new();
/// symbols.set(Severity::Info, "[i]");
///
/// let writer = MemoryWriter::default();
/// let logger = LoggerBuilder::new()
///     .name("fetch")
///     .options(Options::client(false))
///     .symbols(symbols)
///     .make_writer(writer.clone())
///     .build();
///
/// logger.info("downloading");
/// assert_eq!(writer.contents(), "[i] downloading\n");
/// ```
pub struct LoggerBuilder {
    name: String,
    config: LoggerConfig,
    symbols: SymbolTable,
    writer: Option<BoxMakeWriter>,
}

impl LoggerBuilder {
    /// Starts from the default options and the process-wide symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_owned(),
            config: LoggerConfig::default(),
            symbols: active_symbols().clone(),
            writer: None,
        }
    }

    /// Sets the name attached to every line.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Resolves `options` to a preset, keeping the configured output.
    pub fn options(mut self, options: Options) -> Self {
        let output = std::mem::take(&mut self.config.output);
        self.config = LoggerConfig::from_options(&options).with_output(output);
        self
    }

    /// Uses `config` verbatim.
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Reads level symbols from `symbols` instead of the process-wide table.
    pub fn symbols(mut self, symbols: SymbolTable) -> Self {
        self.symbols = symbols;
        self
    }

    /// Sets the output destination.
    pub fn output(mut self, output: Output) -> Self {
        self.config.output = output;
        self
    }

    /// Writes through `make_writer`, ignoring the configured [`Output`].
    pub fn make_writer<M>(mut self, make_writer: M) -> Self
    where
        M: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        self.writer = Some(BoxMakeWriter::new(make_writer));
        self
    }

    /// The configuration that will be built.
    #[must_use]
    pub const fn resolved_config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Builds the logger, reporting construction failures.
    pub fn try_build(self) -> Result<Logger, BuildError> {
        let writer = match self.writer {
            Some(writer) => writer,
            None => open_output(&self.config.output)?,
        };

        let filter = SeverityFilter::new(self.config.level);
        let dispatch = match self.config.encoding {
            Encoding::Console => {
                let layer = tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(writer)
                    .with_filter(filter);
                Dispatch::new(tracing_subscriber::registry().with(layer))
            }
            Encoding::Json => {
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(writer)
                    .with_filter(filter);
                Dispatch::new(tracing_subscriber::registry().with(layer))
            }
            Encoding::Symbol => {
                let layer = tracing_subscriber::fmt::layer()
                    .event_format(SymbolFormat::new(self.symbols))
                    .with_ansi(false)
                    .with_writer(writer)
                    .with_filter(filter);
                Dispatch::new(tracing_subscriber::registry().with(layer))
            }
        };

        Ok(Logger::from_dispatch(&self.name, dispatch, &self.config))
    }

    /// Builds the logger, falling back to [`Logger::nop`] on failure.
    pub fn build(self) -> Logger {
        self.try_build().unwrap_or_else(|_| Logger::nop())
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("custom_writer", &self.writer.is_some())
            .finish_non_exhaustive()
    }
}

fn open_output(output: &Output) -> Result<BoxMakeWriter, BuildError> {
    match output {
        Output::Stderr => Ok(BoxMakeWriter::new(io::stderr)),
        Output::Stdout => Ok(BoxMakeWriter::new(io::stdout)),
        Output::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| BuildError::OpenOutput {
                    path: path.clone(),
                    source,
                })?;
            Ok(BoxMakeWriter::new(Mutex::new(file)))
        }
    }
}

/// Builds a logger from `options`; `None` means [`Options::default`].
///
/// Never fails: construction errors yield [`Logger::nop`].
pub fn new_with_options(options: Option<&Options>) -> Logger {
    let options = options.copied().unwrap_or_default();
    LoggerBuilder::new().options(options).build()
}

/// Logger for client-type applications: symbol-prefixed lines in
/// production, development output when `debug` is set.
pub fn new_client_logger(debug: bool) -> Logger {
    new_with_options(Some(&Options::client(debug)))
}

/// Logger for servers: JSON in production, development output when `debug`
/// is set.
pub fn new_server_logger(debug: bool) -> Logger {
    new_with_options(Some(&Options::server(debug)))
}

/// The process-default logger, built once from the default options.
pub fn default_logger() -> Logger {
    static DEFAULT: OnceLock<Logger> = OnceLock::new();
    DEFAULT
        .get_or_init(|| {
            LoggerBuilder::new()
                .name(DEFAULT_LOGGER_NAME)
                .options(Options::default())
                .build()
        })
        .clone()
}
