//! # Gateway Module
//!
//! Client side of the MovieMatch gateway HTTP API. Everything the frontend
//! does over the network goes through [`GatewayApi`], so the clients and the
//! job poller can be exercised against an in-memory fake.

mod http;

#[cfg(test)]
pub mod fake;

pub use http::HttpGateway;

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::models::{Credentials, TokenBundle};
use crate::recommend::models::{JobStatusResponse, Mode, RecommendationBody, SubmitResponse};

/// Errors that can occur when talking to the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("gateway responded with status {0}")]
    Status(u16),

    #[error("invalid gateway URL: {0}")]
    InvalidUrl(String),
}

impl GatewayError {
    /// Text shown in the status line: the bare status code when the gateway
    /// answered, the error itself otherwise.
    pub fn status_text(&self) -> String {
        match self {
            GatewayError::Status(code) => code.to_string(),
            other => other.to_string(),
        }
    }
}

/// Response of the gateway's `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayHealth {
    pub status: String,
    pub service: String,
    #[serde(default)]
    pub details: Option<HashMap<String, String>>,
}

#[async_trait]
pub trait GatewayApi: Send + Sync {
    /// `POST /auth/login`
    async fn login(&self, credentials: &Credentials) -> Result<TokenBundle, GatewayError>;

    /// `POST /recommendations/{mode}`, bearer-authenticated
    async fn submit(
        &self,
        mode: Mode,
        body: &RecommendationBody,
        bearer: &str,
    ) -> Result<SubmitResponse, GatewayError>;

    /// `GET /recommendations/jobs/{job_id}`, bearer-authenticated
    async fn job_status(&self, job_id: &str, bearer: &str)
    -> Result<JobStatusResponse, GatewayError>;

    /// `GET /health`
    async fn health(&self) -> Result<GatewayHealth, GatewayError>;
}
