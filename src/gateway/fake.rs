//! Scripted in-memory gateway for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{GatewayApi, GatewayError, GatewayHealth};
use crate::auth::models::{Credentials, TokenBundle};
use crate::recommend::models::{JobStatusResponse, Mode, RecommendationBody, SubmitResponse};

/// A scripted reply: the payload, or the HTTP status the gateway answered with
pub type Reply<T> = Result<T, u16>;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Login { email: String },
    Submit { mode: Mode, body: RecommendationBody, bearer: String },
    JobStatus { job_id: String, bearer: String },
    Health,
}

/// Replies are consumed in order; the last job status reply repeats forever.
#[derive(Default)]
pub struct FakeGateway {
    login: Mutex<Option<Reply<TokenBundle>>>,
    submit: Mutex<Option<Reply<SubmitResponse>>>,
    statuses: Mutex<VecDeque<Reply<JobStatusResponse>>>,
    health: Mutex<Option<Reply<GatewayHealth>>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_login(self, reply: Reply<TokenBundle>) -> Self {
        *self.login.lock().unwrap() = Some(reply);
        self
    }

    pub fn with_submit(self, reply: Reply<SubmitResponse>) -> Self {
        *self.submit.lock().unwrap() = Some(reply);
        self
    }

    pub fn with_statuses(self, replies: Vec<Reply<JobStatusResponse>>) -> Self {
        *self.statuses.lock().unwrap() = replies.into();
        self
    }

    pub fn with_health(self, reply: Reply<GatewayHealth>) -> Self {
        *self.health.lock().unwrap() = Some(reply);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn status_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::JobStatus { .. }))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn reply<T: Clone>(slot: &Mutex<Option<Reply<T>>>) -> Result<T, GatewayError> {
        match slot.lock().unwrap().clone() {
            Some(Ok(value)) => Ok(value),
            Some(Err(code)) => Err(GatewayError::Status(code)),
            None => Err(GatewayError::Status(500)),
        }
    }
}

pub fn token_bundle(access_token: &str, user_id: i64) -> TokenBundle {
    TokenBundle {
        access_token: access_token.to_string(),
        refresh_token: format!("{}-refresh", access_token),
        token_type: "bearer".to_string(),
        user_id,
        expires_in: 900,
    }
}

#[async_trait]
impl GatewayApi for FakeGateway {
    async fn login(&self, credentials: &Credentials) -> Result<TokenBundle, GatewayError> {
        self.record(Call::Login {
            email: credentials.email.clone(),
        });
        Self::reply(&self.login)
    }

    async fn submit(
        &self,
        mode: Mode,
        body: &RecommendationBody,
        bearer: &str,
    ) -> Result<SubmitResponse, GatewayError> {
        self.record(Call::Submit {
            mode,
            body: body.clone(),
            bearer: bearer.to_string(),
        });
        Self::reply(&self.submit)
    }

    async fn job_status(
        &self,
        job_id: &str,
        bearer: &str,
    ) -> Result<JobStatusResponse, GatewayError> {
        self.record(Call::JobStatus {
            job_id: job_id.to_string(),
            bearer: bearer.to_string(),
        });
        let mut statuses = self.statuses.lock().unwrap();
        let reply = if statuses.len() > 1 {
            statuses.pop_front()
        } else {
            statuses.front().cloned()
        };
        match reply {
            Some(Ok(status)) => Ok(status),
            Some(Err(code)) => Err(GatewayError::Status(code)),
            None => Err(GatewayError::Status(404)),
        }
    }

    async fn health(&self) -> Result<GatewayHealth, GatewayError> {
        self.record(Call::Health);
        Self::reply(&self.health)
    }
}
