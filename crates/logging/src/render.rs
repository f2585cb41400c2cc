//! crates/logging/src/render.rs
//! Level-symbol rendering for the human-readable client encoding.

use std::fmt;

use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

use crate::severity::Severity;
use crate::symbols::SymbolTable;

/// Separator written between the level symbol and the message.
pub const CONSOLE_SEPARATOR: &str = " ";

/// Writes the current symbol for `severity` to `writer`.
///
/// Performs exactly one table lookup and appends the raw symbol: no padding,
/// no escaping.
pub fn encode_level<W>(severity: Severity, symbols: &SymbolTable, writer: &mut W) -> fmt::Result
where
    W: fmt::Write + ?Sized,
{
    writer.write_str(&symbols.get(severity))
}

/// Event formatter that prefixes each line with the level symbol.
///
/// Lines have the shape `<symbol> <message> [fields...]`. Timestamps and the
/// logger name are omitted to keep CLI output terse.
#[derive(Clone, Debug)]
pub struct SymbolFormat {
    symbols: SymbolTable,
}

impl SymbolFormat {
    /// Creates a formatter reading symbols from `symbols` on every event.
    #[must_use]
    pub const fn new(symbols: SymbolTable) -> Self {
        Self { symbols }
    }

    /// The table this formatter reads from.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }
}

impl Default for SymbolFormat {
    fn default() -> Self {
        Self::new(crate::symbols::active_symbols().clone())
    }
}

impl<S, N> FormatEvent<S, N> for SymbolFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let severity = Severity::from_metadata(event.metadata());
        encode_level(severity, &self.symbols, &mut writer)?;
        writer.write_str(CONSOLE_SEPARATOR)?;
        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
