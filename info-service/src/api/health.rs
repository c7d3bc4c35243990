//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

use crate::info::runtime::format_timestamp;
use crate::info::UptimeReport;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub uptime_seconds: u64,
}

/// GET /health - Liveness only; reports `healthy` whenever the process answers
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let now = Utc::now();
    let uptime = UptimeReport::between(state.started_at, now);

    Json(HealthResponse {
        status: "healthy",
        timestamp: format_timestamp(now),
        uptime_seconds: uptime.seconds,
    })
}
