//! Concurrent symbol updates and emissions.
//!
//! Lines must never interleave, and every line must carry a symbol that was
//! valid at some point during the run.

use std::thread;

use logging::{
    DEFAULT_INFO_SYMBOL, LoggerBuilder, MemoryWriter, Options, Severity, SymbolTable,
    active_symbols, set_info_symbol,
};
use serial_test::serial;

const WRITERS: usize = 4;
const SETTERS: usize = 2;
const LINES_PER_WRITER: usize = 200;

fn assert_well_formed(output: &str, allowed: &[String]) {
    assert_eq!(output.lines().count(), WRITERS * LINES_PER_WRITER);
    for line in output.lines() {
        let (symbol, message) = line
            .split_once(' ')
            .unwrap_or_else(|| panic!("line without separator: {line:?}"));
        assert!(allowed.iter().any(|s| s == symbol), "unexpected symbol in {line:?}");
        assert!(message.starts_with("tick "), "torn line {line:?}");
    }
}

/// An injected table updated from several threads while others log.
#[test]
fn injected_table_under_contention() {
    let table = SymbolTable::new();
    let writer = MemoryWriter::default();
    let logger = LoggerBuilder::new()
        .options(Options::client(false))
        .symbols(table.clone())
        .make_writer(writer.clone())
        .build();

    let allowed: Vec<String> = std::iter::once(DEFAULT_INFO_SYMBOL.to_owned())
        .chain((0..SETTERS).map(|id| format!("[{id}]")))
        .collect();

    thread::scope(|scope| {
        for id in 0..SETTERS {
            let table = table.clone();
            scope.spawn(move || {
                for _ in 0..LINES_PER_WRITER {
                    table.set(Severity::Info, format!("[{id}]"));
                }
            });
        }
        for _ in 0..WRITERS {
            let logger = logger.clone();
            scope.spawn(move || {
                for n in 0..LINES_PER_WRITER {
                    logger.infof(format_args!("tick {n}"));
                }
            });
        }
    });

    assert_well_formed(&writer.contents(), &allowed);
    assert!(allowed[1..].contains(&table.get(Severity::Info)));
}

/// The process-wide setters race with loggers built by the factory.
#[test]
#[serial]
fn global_setters_under_contention() {
    let writer = MemoryWriter::default();
    let logger = LoggerBuilder::new()
        .options(Options::client(false))
        .make_writer(writer.clone())
        .build();

    let allowed = vec![DEFAULT_INFO_SYMBOL.to_owned(), "[A]".to_owned(), "[B]".to_owned()];

    thread::scope(|scope| {
        scope.spawn(|| {
            for n in 0..LINES_PER_WRITER {
                set_info_symbol(if n % 2 == 0 { "[A]" } else { "[B]" });
            }
        });
        for _ in 0..WRITERS {
            let logger = logger.clone();
            scope.spawn(move || {
                for n in 0..LINES_PER_WRITER {
                    logger.infof(format_args!("tick {n}"));
                }
            });
        }
    });

    let last = active_symbols().get(Severity::Info);
    active_symbols().reset();

    assert_well_formed(&writer.contents(), &allowed);
    assert_eq!(last, "[B]");
}
