use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{Value, json};
use tracing::warn;

use crate::server::AppState;

/// Liveness probe.
///
/// # Route
/// - **Method**: GET
/// - **Path**: `/ping`
/// - **Response**: `{"status": "pong"}`
pub async fn ping() -> Json<Value> {
    Json(json!({ "status": "pong" }))
}

/// Reports whether the gateway behind this frontend is reachable.
///
/// # Route
/// - **Method**: GET
/// - **Path**: `/health`
///
/// # HTTP Status Codes
/// - **200 OK**: gateway answered its own `/health`; its payload is included
/// - **503 Service Unavailable**: gateway unreachable or unhealthy
pub async fn gateway_health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.gateway.health().await {
        Ok(health) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "gateway": health })),
        ),
        Err(e) => {
            warn!("Gateway health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "degraded", "error": e.to_string() })),
            )
        }
    }
}
