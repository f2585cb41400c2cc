//! crates/logging/src/filter.rs
//! Per-layer threshold filter aware of simplog's escalated severities.

use tracing::Metadata;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Filter};

use crate::severity::Severity;

/// Enables events at or above a [`Severity`] threshold.
///
/// Spans always pass so a logger's name span stays attached to every event
/// it lets through. `tracing` levels alone cannot express a threshold above
/// [`Severity::Error`]; the event target carries the rest.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SeverityFilter {
    threshold: Severity,
}

impl SeverityFilter {
    /// Creates a filter passing `threshold` and everything more severe.
    #[must_use]
    pub const fn new(threshold: Severity) -> Self {
        Self { threshold }
    }

    /// The configured threshold.
    #[must_use]
    pub const fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Reports whether an event described by `metadata` passes.
    #[must_use]
    pub fn allows(&self, metadata: &Metadata<'_>) -> bool {
        metadata.is_span() || Severity::from_metadata(metadata) >= self.threshold
    }
}

impl<S> Filter<S> for SeverityFilter {
    fn enabled(&self, metadata: &Metadata<'_>, _cx: &Context<'_, S>) -> bool {
        self.allows(metadata)
    }

    fn max_level_hint(&self) -> Option<LevelFilter> {
        Some(LevelFilter::from_level(self.threshold.tracing_level()))
    }
}
