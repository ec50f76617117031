//! Time windows used by event and transaction queries.

use serde::{Deserialize, Serialize};

/// A half-open interval of milliseconds since the Unix epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    /// Inclusive start.
    pub start_time: u64,
    /// Exclusive end.
    pub end_time: u64,
}

impl TimeRange {
    pub fn new(start_time: u64, end_time: u64) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    pub fn contains(&self, millis: u64) -> bool {
        millis >= self.start_time && millis < self.end_time
    }

    pub fn is_empty(&self) -> bool {
        self.end_time <= self.start_time
    }

    pub fn duration_ms(&self) -> u64 {
        self.end_time.saturating_sub(self.start_time)
    }
}
