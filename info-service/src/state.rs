use crate::config::Config;
use crate::info::{OsSystemInfo, SystemInfoProvider};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Shared application state. Built once, right before the server starts
/// accepting connections; read-only afterwards.
pub struct AppState {
    pub config: Config,
    pub started_at: DateTime<Utc>,
    pub system: Arc<dyn SystemInfoProvider>,
}

impl AppState {
    /// State backed by the real host, with the start time taken now.
    pub fn new(config: Config) -> Self {
        Self::with_parts(config, Utc::now(), Arc::new(OsSystemInfo))
    }

    pub fn with_parts(
        config: Config,
        started_at: DateTime<Utc>,
        system: Arc<dyn SystemInfoProvider>,
    ) -> Self {
        Self {
            config,
            started_at,
            system,
        }
    }
}
