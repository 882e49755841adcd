use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::{GatewayApi, GatewayError, GatewayHealth};
use crate::auth::models::{Credentials, TokenBundle};
use crate::recommend::models::{JobStatusResponse, Mode, RecommendationBody, SubmitResponse};

/// reqwest-backed gateway client
pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

impl HttpGateway {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| GatewayError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(GatewayError::InvalidUrl(base_url.to_string()));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        what: &str,
    ) -> Result<T, GatewayError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("Gateway {} returned HTTP {}", what, status);
            return Err(GatewayError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        debug!("Gateway {} returned {} bytes", what, bytes.len());
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl GatewayApi for HttpGateway {
    async fn login(&self, credentials: &Credentials) -> Result<TokenBundle, GatewayError> {
        let url = self.endpoint(&["auth", "login"])?;
        self.send(self.client.post(url).json(credentials), "login").await
    }

    async fn submit(
        &self,
        mode: Mode,
        body: &RecommendationBody,
        bearer: &str,
    ) -> Result<SubmitResponse, GatewayError> {
        let url = self.endpoint(&["recommendations", mode.as_str()])?;
        let request = self.client.post(url).bearer_auth(bearer).json(body);
        self.send(request, "recommendation submit").await
    }

    async fn job_status(
        &self,
        job_id: &str,
        bearer: &str,
    ) -> Result<JobStatusResponse, GatewayError> {
        let url = self.endpoint(&["recommendations", "jobs", job_id])?;
        let request = self.client.get(url).bearer_auth(bearer);
        self.send(request, "job status").await
    }

    async fn health(&self) -> Result<GatewayHealth, GatewayError> {
        let url = self.endpoint(&["health"])?;
        self.send(self.client.get(url), "health").await
    }
}
