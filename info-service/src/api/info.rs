//! Service information endpoint.

use axum::extract::{Request, State};
use axum::Json;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::error::AppError;
use crate::info::{
    InfoDocument, RequestDescriptor, RuntimeDescriptor, ServiceDescriptor, SystemDescriptor,
    ENDPOINTS,
};
use crate::state::AppState;

/// GET / - Service, system, runtime and request information
pub async fn service_info(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<InfoDocument>, AppError> {
    info!("Request: {} {}", request.method(), request.uri().path());

    let provider = state.system.clone();
    let system = tokio::task::spawn_blocking(move || SystemDescriptor::collect(provider.as_ref()))
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(Json(InfoDocument {
        service: ServiceDescriptor::from_config(&state.config),
        system,
        runtime: RuntimeDescriptor::observe(state.started_at, Utc::now()),
        request: RequestDescriptor::from_request(&request),
        endpoints: ENDPOINTS,
    }))
}
