//! Time source port, so record timestamps are testable.

use chrono::{NaiveDateTime, Utc};

/// Format of `createdAt` / `openedAt` record fields (UTC).
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Abstract clock.
pub trait TimeSource: Send + Sync {
    /// Current timestamp formatted with [`TIMESTAMP_FORMAT`].
    fn timestamp(&self) -> String;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn timestamp(&self) -> String {
        Utc::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone)]
pub struct FixedTimeSource {
    stamp: String,
}

impl FixedTimeSource {
    pub fn new(at: NaiveDateTime) -> Self {
        Self {
            stamp: at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Frozen at 2024-01-01 00:00:00.
    #[must_use]
    pub fn epoch() -> Self {
        Self {
            stamp: "20240101000000".to_string(),
        }
    }
}

impl TimeSource for FixedTimeSource {
    fn timestamp(&self) -> String {
        self.stamp.clone()
    }
}
