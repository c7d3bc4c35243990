use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::uptime::UptimeReport;

pub const TIMEZONE: &str = "UTC";

/// Uptime plus the wall clock at observation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeDescriptor {
    pub uptime_seconds: u64,
    pub uptime_human: String,
    pub current_time: String,
    pub timezone: &'static str,
}

impl RuntimeDescriptor {
    pub fn observe(started_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let uptime = UptimeReport::between(started_at, now);
        Self {
            uptime_seconds: uptime.seconds,
            uptime_human: uptime.human,
            current_time: format_timestamp(now),
            timezone: TIMEZONE,
        }
    }
}

/// ISO-8601 UTC with microseconds and a `Z` suffix.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}
