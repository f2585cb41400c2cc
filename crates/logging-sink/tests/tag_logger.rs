//! Integration tests for the tag-prefixed logger.

use std::fs::{self, File};
use std::thread;

use logging_sink::{Level, LineMode, TagLogger, render};
use proptest::prelude::*;

// ============================================================================
// Threshold
// ============================================================================

/// A Warning threshold admits Warning, Error and Fatal only.
#[test]
fn warning_threshold_filters_debug_and_info() {
    let logger = TagLogger::new(Vec::<u8>::new(), Level::Warning);

    logger.debugf(format_args!("d"));
    logger.infof(format_args!("i"));
    logger.warningf(format_args!("w"));
    logger.errorf(format_args!("e"));
    logger.fatalf(format_args!("f"));

    let output = String::from_utf8(logger.into_inner()).expect("utf-8");
    assert_eq!(output, "[WARN] w\n[ERROR] e\n[FATAL] f\n");
}

/// Lowering the threshold takes effect for later writes.
#[test]
fn threshold_can_be_changed() {
    let mut logger = TagLogger::new(Vec::<u8>::new(), Level::default());
    logger.infof(format_args!("dropped"));
    logger.set_threshold(Level::Info);
    logger.infof(format_args!("kept"));

    assert_eq!(logger.threshold(), Level::Info);
    assert_eq!(logger.into_inner(), b"[INFO] kept\n");
}

/// Verbose loggers still write to their primary writer.
#[test]
fn verbose_keeps_the_primary_writer() {
    let logger = TagLogger::new(Vec::<u8>::new(), Level::Info).verbose(true);
    assert!(logger.is_verbose());

    logger.infof(format_args!("echoed"));

    assert_eq!(logger.into_inner(), b"[INFO] echoed\n");
}

// ============================================================================
// Shared Files
// ============================================================================

/// Loggers sharing one file never interleave their lines.
#[test]
fn loggers_sharing_a_file_do_not_interleave() {
    const THREADS: usize = 4;
    const LINES: usize = 100;

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("shared.log");
    let file = File::create(&path).expect("create log file");

    thread::scope(|scope| {
        for id in 0..THREADS {
            let writer = file.try_clone().expect("clone file handle");
            scope.spawn(move || {
                let logger = TagLogger::new(writer, Level::Debug);
                for n in 0..LINES {
                    logger.infoln(&[&"worker", &id, &"line", &n]);
                }
            });
        }
    });

    let contents = fs::read_to_string(&path).expect("read log file");
    assert_eq!(contents.lines().count(), THREADS * LINES);
    for line in contents.lines() {
        assert!(line.starts_with("[INFO] worker "), "torn line {line:?}");
        assert_eq!(line.split(' ').count(), 5, "torn line {line:?}");
    }
}

// ============================================================================
// Line Termination
// ============================================================================

proptest! {
    /// Every message ends with exactly one newline under the default mode.
    #[test]
    fn with_newline_ends_every_message_once(message in "[^\n]{0,40}", terminated in any::<bool>()) {
        let input = if terminated { format!("{message}\n") } else { message.clone() };
        let line = render(Level::Error, &input, LineMode::WithNewline);

        prop_assert_eq!(line, format!("[ERROR] {message}\n"));
    }

    /// The verbatim mode never adds or removes bytes.
    #[test]
    fn without_newline_is_verbatim(message in ".{0,40}") {
        let line = render(Level::Debug, &message, LineMode::WithoutNewline);

        prop_assert_eq!(line, format!("[DEBUG] {message}"));
    }

    /// Levels below the threshold never produce output.
    #[test]
    fn below_threshold_writes_nothing(threshold in 0u8..=4, level in 0u8..=4) {
        let threshold = Level::try_from(threshold).expect("in range");
        let level = Level::try_from(level).expect("in range");
        let logger = TagLogger::new(Vec::<u8>::new(), threshold);

        logger.write(level, "sample");

        prop_assert_eq!(logger.into_inner().is_empty(), level < threshold);
    }
}
