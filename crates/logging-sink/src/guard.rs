//! crates/logging-sink/src/guard.rs
//! RAII override of a [`TagLogger`]'s [`LineMode`].

use crate::line_mode::LineMode;
use crate::tag_logger::TagLogger;

/// Temporarily overrides a [`TagLogger`]'s [`LineMode`].
///
/// Created by [`TagLogger::scoped_line_mode`]. The guard dereferences to the
/// logger, so writes can go through it directly. Dropping it restores the
/// previous mode; [`LineModeGuard::keep`] adopts the override instead.
///
/// ```
/// use logging_sink::{Level, LineMode, TagLogger};
///
/// let mut logger = TagLogger::new(Vec::new(), Level::Info);
/// {
///     let logger = logger.scoped_line_mode(LineMode::WithoutNewline);
///     logger.write(Level::Info, "50%... ");
///     logger.write(Level::Info, "100%");
/// }
/// logger.write(Level::Info, "done");
///
/// assert_eq!(
///     String::from_utf8(logger.into_inner()).unwrap(),
///     "[INFO] 50%... [INFO] 100%[INFO] done\n"
/// );
/// ```
#[must_use = "dropping the guard immediately restores the previous line mode"]
pub struct LineModeGuard<'a, W> {
    logger: &'a mut TagLogger<W>,
    previous: LineMode,
}

impl<'a, W> LineModeGuard<'a, W> {
    pub(crate) const fn new(logger: &'a mut TagLogger<W>, previous: LineMode) -> Self {
        Self { logger, previous }
    }

    /// The mode restored on drop.
    #[must_use]
    pub const fn previous_line_mode(&self) -> LineMode {
        self.previous
    }

    /// Keeps the overriding mode after the guard is gone.
    pub fn keep(mut self) {
        self.previous = self.logger.line_mode();
    }
}

impl<W> Drop for LineModeGuard<'_, W> {
    fn drop(&mut self) {
        self.logger.set_line_mode(self.previous);
    }
}

impl<W> std::ops::Deref for LineModeGuard<'_, W> {
    type Target = TagLogger<W>;

    fn deref(&self) -> &Self::Target {
        self.logger
    }
}

impl<W> std::ops::DerefMut for LineModeGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.logger
    }
}
