use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::utils::date;

/// One glass of water.
///
/// `time` is only used for display; `timestamp` (milliseconds since the
/// epoch) is the ordering key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckIn {
    pub time: String,
    pub timestamp: i64,
}

impl CheckIn {
    pub fn new(time: impl Into<String>, timestamp: i64) -> Self {
        Self {
            time: time.into(),
            timestamp,
        }
    }

    /// Build a check-in for the given local instant.
    pub fn at(now: DateTime<Local>) -> Self {
        Self {
            time: date::time_of_day(&now),
            timestamp: now.timestamp_millis(),
        }
    }
}
