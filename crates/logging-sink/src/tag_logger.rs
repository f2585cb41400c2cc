//! crates/logging-sink/src/tag_logger.rs
//! Threshold logger that prefixes each message with a bracketed tag.

use std::fmt::{self, Write as _};
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::guard::LineModeGuard;
use crate::level::Level;
use crate::line_mode::LineMode;

/// Serializes writes across every [`TagLogger`] in the process.
static WRITE_LOCK: Mutex<()> = Mutex::new(());

/// Generates the three emission styles for each level.
macro_rules! level_methods {
    ($($level:ident => $plain:ident, $line:ident, $formatted:ident;)+) => {
        $(
            #[doc = concat!("Concatenates `values` and writes them at [`Level::", stringify!($level), "`].")]
            pub fn $plain(&self, values: &[&dyn fmt::Display]) {
                self.print(Level::$level, values);
            }

            #[doc = concat!("Space-joins `values` and writes a full line at [`Level::", stringify!($level), "`].")]
            pub fn $line(&self, values: &[&dyn fmt::Display]) {
                self.println(Level::$level, values);
            }

            #[doc = concat!("Writes a `format_args!` template at [`Level::", stringify!($level), "`].")]
            pub fn $formatted(&self, args: fmt::Arguments<'_>) {
                self.printf(Level::$level, args);
            }
        )+
    };
}

/// A logger over a plain writer that emits `[TAG] message` lines.
///
/// Messages below the threshold are dropped. When `verbose` is set, every
/// emitted line is also copied to standard output. Write errors are
/// discarded: losing a log line never surfaces to the caller.
///
/// ```
/// use logging_sink::{Level, TagLogger};
///
/// let logger = TagLogger::new(Vec::new(), Level::Warning);
/// logger.infof(format_args!("cache warmed in {} ms", 12));
/// logger.warningf(format_args!("disk {}% full", 91));
///
/// let output = String::from_utf8(logger.into_inner()).unwrap();
/// assert_eq!(output, "[WARN] disk 91% full\n");
/// ```
pub struct TagLogger<W> {
    writer: Mutex<W>,
    threshold: Level,
    verbose: bool,
    line_mode: LineMode,
}

impl<W> TagLogger<W> {
    /// Creates a logger emitting `threshold` and everything more severe.
    pub fn new(writer: W, threshold: Level) -> Self {
        Self::with_line_mode(writer, threshold, LineMode::default())
    }

    /// Creates a logger with an explicit [`LineMode`].
    pub fn with_line_mode(writer: W, threshold: Level, line_mode: LineMode) -> Self {
        Self {
            writer: Mutex::new(writer),
            threshold,
            verbose: false,
            line_mode,
        }
    }

    /// Copies every emitted line to standard output as well.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// The least severe level that is written.
    #[must_use]
    pub const fn threshold(&self) -> Level {
        self.threshold
    }

    /// Changes the threshold.
    pub fn set_threshold(&mut self, threshold: Level) {
        self.threshold = threshold;
    }

    /// Reports whether lines are echoed to standard output.
    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// The current newline policy.
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Changes the newline policy.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Switches to `line_mode` until the returned guard is dropped.
    pub fn scoped_line_mode(&mut self, line_mode: LineMode) -> LineModeGuard<'_, W> {
        let previous = std::mem::replace(&mut self.line_mode, line_mode);
        LineModeGuard::new(self, previous)
    }

    /// Reports whether `level` passes the threshold.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.threshold
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_writer(&self) -> MutexGuard<'_, W> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> TagLogger<W> {
    /// Writes `message` at `level` using the logger's [`LineMode`].
    pub fn write(&self, level: Level, message: &str) {
        self.write_with_mode(level, message, self.line_mode);
    }

    /// Writes `message` at `level` with a one-off [`LineMode`].
    pub fn write_with_mode(&self, level: Level, message: &str, line_mode: LineMode) {
        if !self.enabled(level) {
            return;
        }

        let line = render(level, message, line_mode);
        let _serial = WRITE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = self.lock_writer().write_all(line.as_bytes());
        if self.verbose {
            let _ = io::stdout().lock().write_all(line.as_bytes());
        }
    }

    /// Writes `values` concatenated without separators.
    pub fn print(&self, level: Level, values: &[&dyn fmt::Display]) {
        if !self.enabled(level) {
            return;
        }
        let mut message = String::new();
        for value in values {
            let _ = write!(message, "{value}");
        }
        self.write(level, &message);
    }

    /// Writes `values` joined by single spaces, always ending the line.
    pub fn println(&self, level: Level, values: &[&dyn fmt::Display]) {
        if !self.enabled(level) {
            return;
        }
        let message = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        self.write_with_mode(level, &message, LineMode::WithNewline);
    }

    /// Writes a formatted template.
    pub fn printf(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        self.write(level, &fmt::format(args));
    }

    /// Flushes the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        let _serial = WRITE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        self.lock_writer().flush()
    }

    level_methods! {
        Debug => debug, debugln, debugf;
        Info => info, infoln, infof;
        Warning => warning, warningln, warningf;
        Error => error, errorln, errorf;
        Fatal => fatal, fatalln, fatalf;
    }
}

impl<W> fmt::Debug for TagLogger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagLogger")
            .field("threshold", &self.threshold)
            .field("verbose", &self.verbose)
            .field("line_mode", &self.line_mode)
            .finish_non_exhaustive()
    }
}

/// Renders `[TAG] message` with the newline policy applied.
#[must_use]
pub fn render(level: Level, message: &str, line_mode: LineMode) -> String {
    let mut line = String::with_capacity(level.tag().len() + message.len() + 4);
    line.push('[');
    line.push_str(level.tag());
    line.push_str("] ");
    line_mode.terminate_into(&mut line, message);
    line
}
