//! Uptime computation.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Elapsed time since the service started serving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UptimeReport {
    pub seconds: u64,
    pub human: String,
}

impl UptimeReport {
    /// Compute uptime between `started_at` and `now`.
    ///
    /// Whole seconds are truncated. A `now` earlier than `started_at`
    /// (wall clock stepped backwards) reports zero.
    pub fn between(started_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let seconds = (now - started_at).num_seconds().max(0) as u64;
        Self::from_seconds(seconds)
    }

    pub fn from_seconds(seconds: u64) -> Self {
        Self {
            seconds,
            human: humanize(seconds),
        }
    }
}

/// Render `seconds` as hours and minutes; leftover seconds are dropped.
pub fn humanize(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    if hours > 0 {
        format!("{}, {}", plural(hours, "hour"), plural(minutes, "minute"))
    } else {
        plural(minutes, "minute")
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
