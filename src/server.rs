//! # Server Module
//!
//! HTTP server setup and route configuration for the MovieMatch frontend.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::gateway::{GatewayApi, HttpGateway};
use crate::recommend::JobPoller;
use crate::routes::{auth, health, page, recommend};
use crate::ui::{PageRenderer, UiStore};

/// Application state shared across all route handlers
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn GatewayApi>,
    pub store: UiStore,
    pub poller: Arc<JobPoller>,
    pub renderer: Arc<PageRenderer>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/login", post(auth::submit_login))
        .route("/recommend", post(recommend::submit_recommendation))
        .route("/ping", get(health::ping))
        .route("/health", get(health::gateway_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the MovieMatch frontend server.
///
/// The gateway is probed once on startup; an unreachable gateway is logged
/// but does not stop the server, since the page is still usable once the
/// gateway comes up.
pub async fn start(config: Config) -> Result<()> {
    let gateway = HttpGateway::new(&config.gateway.base_url, config.gateway.request_timeout)
        .context("Failed to create gateway client")?;

    match gateway.health().await {
        Ok(health) => {
            tracing::info!(
                "Gateway {} is {} ({})",
                gateway.base_url(),
                health.status,
                health.service
            );
            tracing::debug!("Gateway details: {:?}", health.details);
        }
        Err(e) => tracing::warn!("Gateway {} not reachable yet: {}", gateway.base_url(), e),
    }

    let state = AppState {
        gateway: Arc::new(gateway),
        store: UiStore::default(),
        poller: Arc::new(JobPoller::new(config.polling)),
        renderer: Arc::new(PageRenderer::new().context("Failed to load page template")?),
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {} - port may already be in use", addr))?;

    tracing::info!("MovieMatch frontend listening on http://{}", addr);
    tracing::info!("Gateway: {}", config.gateway.base_url);
    tracing::info!(
        "Polling every {:?}, giving up after {:?}",
        config.polling.interval,
        config.polling.timeout
    );

    axum::serve(listener, router(state))
        .await
        .context("Server terminated unexpectedly")
}
