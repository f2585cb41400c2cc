//! crates/logging/src/capture.rs
//! In-memory writer for capturing logger output.

use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing_subscriber::fmt::MakeWriter;

/// Cloneable in-memory sink; every clone appends to the same buffer.
///
/// Pass it to [`LoggerBuilder::make_writer`](crate::LoggerBuilder::make_writer)
/// to inspect what a logger renders.
///
/// ```
/// use logging::{LoggerBuilder, MemoryWriter, Options};
///
/// let writer = MemoryWriter::default();
/// let logger = LoggerBuilder::new()
///     .options(Options::default())
///     .make_writer(writer.clone())
///     .build();
///
/// logger.info("ready");
/// assert!(writer.contents().contains("ready"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryWriter {
    /// Returns everything written so far, lossily decoded as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Discards everything written so far.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl io::Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for MemoryWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
