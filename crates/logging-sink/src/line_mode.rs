//! crates/logging-sink/src/line_mode.rs
//! Trailing-newline policy for [`TagLogger`](crate::TagLogger).

/// Controls whether a [`TagLogger`](crate::TagLogger) terminates each line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum LineMode {
    /// Terminate every message with exactly one newline.
    #[default]
    WithNewline,
    /// Write the message exactly as given.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode terminates messages with a newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }

    /// Appends `message` to `buffer`, adding a newline only when the mode asks
    /// for one and `message` does not already end with one.
    pub fn terminate_into(self, buffer: &mut String, message: &str) {
        buffer.push_str(message);
        if self.append_newline() && !message.ends_with('\n') {
            buffer.push('\n');
        }
    }
}

impl From<bool> for LineMode {
    /// `true` selects [`LineMode::WithNewline`].
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<LineMode> for bool {
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}

#[cfg(test)]
mod tests {
    use super::LineMode;

    fn terminated(mode: LineMode, message: &str) -> String {
        let mut buffer = String::new();
        mode.terminate_into(&mut buffer, message);
        buffer
    }

    #[test]
    fn default_terminates_lines() {
        assert_eq!(LineMode::default(), LineMode::WithNewline);
    }

    #[test]
    fn bool_conversions_agree() {
        for flag in [true, false] {
            assert_eq!(bool::from(LineMode::from(flag)), flag);
        }
    }

    #[test]
    fn with_newline_adds_one_only_when_missing() {
        assert_eq!(terminated(LineMode::WithNewline, "done"), "done\n");
        assert_eq!(terminated(LineMode::WithNewline, "done\n"), "done\n");
        assert_eq!(terminated(LineMode::WithNewline, ""), "\n");
    }

    #[test]
    fn without_newline_is_verbatim() {
        assert_eq!(terminated(LineMode::WithoutNewline, "done"), "done");
        assert_eq!(terminated(LineMode::WithoutNewline, "done\n"), "done\n");
    }
}
