//! crates/logging/src/symbols.rs
//! Runtime-adjustable symbols rendered in place of the level name.
//!
//! A [`SymbolTable`] is a shared handle: clones observe each other's updates,
//! and every logger built against a table re-reads it on each emission. The
//! process-wide table returned by [`active_symbols`] backs the `set_*_symbol`
//! functions and is the default for every logger the factory builds.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use crate::severity::Severity;

/// Default symbol for [`Severity::Debug`].
pub const DEFAULT_DEBUG_SYMBOL: &str = "🐞";
/// Default symbol for [`Severity::Info`].
pub const DEFAULT_INFO_SYMBOL: &str = "💡";
/// Default symbol for [`Severity::Warn`].
pub const DEFAULT_WARN_SYMBOL: &str = "⚠️ ";
/// Default symbol for [`Severity::Error`].
pub const DEFAULT_ERROR_SYMBOL: &str = "🔥";
/// Default symbol for [`Severity::Fatal`].
pub const DEFAULT_FATAL_SYMBOL: &str = "💀";
/// Default symbol for [`Severity::Panic`].
pub const DEFAULT_PANIC_SYMBOL: &str = "🚨";
/// Default symbol for [`Severity::DPanic`].
pub const DEFAULT_DPANIC_SYMBOL: &str = "🚨";

impl Severity {
    /// The compiled-in symbol for this severity.
    #[must_use]
    pub const fn default_symbol(self) -> &'static str {
        match self {
            Self::Debug => DEFAULT_DEBUG_SYMBOL,
            Self::Info => DEFAULT_INFO_SYMBOL,
            Self::Warn => DEFAULT_WARN_SYMBOL,
            Self::Error => DEFAULT_ERROR_SYMBOL,
            Self::DPanic => DEFAULT_DPANIC_SYMBOL,
            Self::Panic => DEFAULT_PANIC_SYMBOL,
            Self::Fatal => DEFAULT_FATAL_SYMBOL,
        }
    }
}

/// Shared mapping from severity to display symbol.
///
/// A single mutex guards the whole map; readers and writers take the same
/// lock. Lookups never come back empty-handed: a severity without an entry
/// resolves to [`Severity::default_symbol`].
#[derive(Clone, Debug)]
pub struct SymbolTable {
    symbols: Arc<Mutex<HashMap<Severity, String>>>,
}

impl SymbolTable {
    /// Creates an independent table holding the default symbols.
    #[must_use]
    pub fn new() -> Self {
        Self {
            symbols: Arc::new(Mutex::new(default_symbols())),
        }
    }

    /// Returns the current symbol for `severity`.
    #[must_use]
    pub fn get(&self, severity: Severity) -> String {
        self.lock()
            .get(&severity)
            .map_or_else(|| severity.default_symbol().to_owned(), Clone::clone)
    }

    /// Replaces the symbol for `severity`.
    pub fn set(&self, severity: Severity, symbol: impl Into<String>) {
        let symbol = symbol.into();
        self.lock().insert(severity, symbol);
    }

    /// Restores the default symbol for every severity.
    pub fn reset(&self) {
        *self.lock() = default_symbols();
    }

    /// Reports whether both handles point at the same table.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.symbols, &other.symbols)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Severity, String>> {
        // A panic while holding the lock cannot leave the map half-written.
        self.symbols.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

fn default_symbols() -> HashMap<Severity, String> {
    Severity::ALL
        .into_iter()
        .map(|severity| (severity, severity.default_symbol().to_owned()))
        .collect()
}

/// The process-wide table shared by every logger the factory builds.
pub fn active_symbols() -> &'static SymbolTable {
    static ACTIVE: OnceLock<SymbolTable> = OnceLock::new();
    ACTIVE.get_or_init(SymbolTable::new)
}

/// Sets the process-wide debug symbol.
pub fn set_debug_symbol(symbol: impl Into<String>) {
    active_symbols().set(Severity::Debug, symbol);
}

/// Sets the process-wide info symbol.
pub fn set_info_symbol(symbol: impl Into<String>) {
    active_symbols().set(Severity::Info, symbol);
}

/// Sets the process-wide warning symbol.
pub fn set_warn_symbol(symbol: impl Into<String>) {
    active_symbols().set(Severity::Warn, symbol);
}

/// Sets the process-wide error symbol.
pub fn set_error_symbol(symbol: impl Into<String>) {
    active_symbols().set(Severity::Error, symbol);
}

/// Sets the process-wide fatal symbol.
pub fn set_fatal_symbol(symbol: impl Into<String>) {
    active_symbols().set(Severity::Fatal, symbol);
}

/// Sets the process-wide panic symbol.
pub fn set_panic_symbol(symbol: impl Into<String>) {
    active_symbols().set(Severity::Panic, symbol);
}

/// Sets the process-wide dpanic symbol.
pub fn set_dpanic_symbol(symbol: impl Into<String>) {
    active_symbols().set(Severity::DPanic, symbol);
}
