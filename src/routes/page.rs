use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use tracing::error;

use crate::server::AppState;

/// `GET /`: render the current UI state
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let snapshot = state.store.snapshot().await;
    state.renderer.render(&snapshot).map(Html).map_err(|e| {
        error!("Failed to render page: {:?}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
