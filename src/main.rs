//! # MovieMatch Web
//!
//! Server-rendered frontend for the MovieMatch gateway, built with Rust, Axum
//! and Tokio. It logs a user in, submits recommendation jobs, and follows each
//! job by polling until it completes, fails, or runs out of time.
//!
//! ## Architecture
//! - `server`: server initialization and route wiring
//! - `config`: environment variable configuration
//! - `gateway`: HTTP client for the external gateway API
//! - `auth`: session state and the login client
//! - `recommend`: recommendation request client and job poller
//! - `ui`: state container, reducer and page rendering
//! - `routes`: HTTP route handlers
//!
//! ## Environment Setup
//! Settings are read from the environment, or from a `.env` file:
//! ```bash
//! MOVIEMATCH_API_BASE=http://localhost:8000
//! SERVER_PORT=5173
//! ```
//!
//! ## Running the Server
//! ```bash
//! cargo run
//! ```
//!
//! The page is served on `http://127.0.0.1:5173` by default.

mod auth;
mod config;
mod gateway;
mod recommend;
mod routes;
mod server;
mod ui;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // a missing .env is fine, the environment may already be set
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("moviematch_web=info,tower_http=info")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false) // Don't show module targets for cleaner output
                .compact(),
        )
        .init();

    tracing::info!(
        "Starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    tracing::info!(
        "Build profile: {}",
        if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        }
    );

    let config = config::Config::from_env()?;
    server::start(config).await
}
