//! crates/logging/src/config.rs
//! Caller-facing options and the presets they resolve to.

use std::path::PathBuf;

use crate::severity::Severity;

/// Options selecting which preset a logger is built from.
///
/// The three flags are independent; every combination is valid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Enables the development preset: human-readable, debug and above.
    pub debug: bool,
    /// Selects structured output for production servers.
    pub server: bool,
    /// Suppresses automatic stack-trace capture regardless of preset.
    pub disable_stacktrace: bool,
}

impl Options {
    /// Options for a client-type application.
    #[must_use]
    pub const fn client(debug: bool) -> Self {
        Self {
            debug,
            server: false,
            disable_stacktrace: true,
        }
    }

    /// Options for a server-type application.
    #[must_use]
    pub const fn server(debug: bool) -> Self {
        Self {
            debug,
            server: true,
            disable_stacktrace: true,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::client(false)
    }
}

/// How events are rendered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Encoding {
    /// Human-readable lines with timestamp, textual level and logger name.
    Console,
    /// One JSON object per event.
    Json,
    /// Level symbol followed by the message; see [`SymbolFormat`](crate::SymbolFormat).
    Symbol,
}

/// Where rendered events are written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Output {
    /// The standard error stream.
    #[default]
    Stderr,
    /// The standard output stream.
    Stdout,
    /// A file opened in append mode, created if missing.
    File(PathBuf),
}

/// A fully resolved logger configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoggerConfig {
    /// Lowest severity that is emitted.
    pub level: Severity,
    /// Event encoding.
    pub encoding: Encoding,
    /// Development mode makes [`Severity::DPanic`] panic.
    pub development: bool,
    /// Lowest severity that captures a stack trace; `None` disables capture.
    pub stacktrace_level: Option<Severity>,
    /// Output destination.
    pub output: Output,
}

impl LoggerConfig {
    /// Human-readable preset enabled from [`Severity::Debug`].
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: Severity::Debug,
            encoding: Encoding::Console,
            development: true,
            stacktrace_level: Some(Severity::Warn),
            output: Output::Stderr,
        }
    }

    /// Structured preset enabled from [`Severity::Info`].
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Severity::Info,
            encoding: Encoding::Json,
            development: false,
            stacktrace_level: Some(Severity::Error),
            output: Output::Stderr,
        }
    }

    /// Resolves `options` to a preset.
    ///
    /// Debug mode picks the development preset for clients and servers
    /// alike. Production clients swap the JSON encoder for the level-symbol
    /// encoding, which never carries stack traces.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        let mut config = if options.debug {
            Self::development()
        } else {
            let mut config = Self::production();
            if !options.server {
                config.encoding = Encoding::Symbol;
                config.stacktrace_level = None;
            }
            config
        };

        if options.disable_stacktrace {
            config.stacktrace_level = None;
        }

        config
    }

    /// Replaces the output destination.
    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    /// Replaces the threshold severity.
    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// The stack-trace threshold actually applied; the symbol encoding has
    /// no place for a trace and always yields `None`.
    #[must_use]
    pub fn effective_stacktrace_level(&self) -> Option<Severity> {
        self.stacktrace_level
            .filter(|_| self.encoding != Encoding::Symbol)
    }

    /// Reports whether an emission at `severity` captures a stack trace.
    #[must_use]
    pub fn captures_stacktrace(&self, severity: Severity) -> bool {
        self.effective_stacktrace_level()
            .is_some_and(|threshold| severity >= threshold)
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::from_options(&Options::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_a_quiet_client() {
        let options = Options::default();
        assert!(!options.debug);
        assert!(!options.server);
        assert!(options.disable_stacktrace);
    }

    #[test]
    fn debug_selects_development_for_both_roles() {
        for server in [false, true] {
            let config = LoggerConfig::from_options(&Options {
                debug: true,
                server,
                disable_stacktrace: false,
            });
            assert_eq!(config.level, Severity::Debug);
            assert_eq!(config.encoding, Encoding::Console);
            assert!(config.development);
        }
    }

    #[test]
    fn production_server_is_structured() {
        let config = LoggerConfig::from_options(&Options::server(false));
        assert_eq!(config.level, Severity::Info);
        assert_eq!(config.encoding, Encoding::Json);
        assert!(!config.development);
    }

    #[test]
    fn production_client_uses_symbols() {
        let config = LoggerConfig::from_options(&Options::client(false));
        assert_eq!(config.level, Severity::Info);
        assert_eq!(config.encoding, Encoding::Symbol);
    }

    #[test]
    fn disable_stacktrace_overrides_every_preset() {
        for debug in [false, true] {
            for server in [false, true] {
                let config = LoggerConfig::from_options(&Options {
                    debug,
                    server,
                    disable_stacktrace: true,
                });
                assert_eq!(config.stacktrace_level, None);
                assert!(!config.captures_stacktrace(Severity::Fatal));
            }
        }
    }

    #[test]
    fn enabled_stacktrace_keeps_preset_threshold() {
        let production = LoggerConfig::from_options(&Options {
            debug: false,
            server: true,
            disable_stacktrace: false,
        });
        assert!(!production.captures_stacktrace(Severity::Warn));
        assert!(production.captures_stacktrace(Severity::Error));

        let development = LoggerConfig::from_options(&Options {
            debug: true,
            server: false,
            disable_stacktrace: false,
        });
        assert!(development.captures_stacktrace(Severity::Warn));
        assert!(!development.captures_stacktrace(Severity::Info));
    }

    #[test]
    fn symbol_encoding_never_captures_stacktraces() {
        let client = LoggerConfig::from_options(&Options {
            disable_stacktrace: false,
            ..Options::default()
        });
        assert_eq!(client.stacktrace_level, None);
        assert!(!client.captures_stacktrace(Severity::Fatal));

        let forced = LoggerConfig {
            stacktrace_level: Some(Severity::Debug),
            ..client
        };
        assert_eq!(forced.effective_stacktrace_level(), None);
        assert!(!forced.captures_stacktrace(Severity::Error));
    }

    #[test]
    fn default_config_matches_default_options() {
        assert_eq!(
            LoggerConfig::default(),
            LoggerConfig::from_options(&Options::default())
        );
    }
}
