//! Job poller
//!
//! Queries a queued job's status once per interval until the job completes,
//! fails, a status check is rejected, or the wall-clock deadline passes. The
//! server-side job is never cancelled; on timeout the poller just stops
//! asking.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::models::JobStatus;
use super::request::QueuedJob;
use crate::config::PollingConfig;
use crate::gateway::GatewayApi;
use crate::ui::{UiEvent, UiStore};

/// Source of the current time for the polling deadline
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Delay between two status checks
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Real time, via tokio's timer
pub struct TokioTimer;

impl Clock for TokioTimer {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}

#[async_trait]
impl Sleeper for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobPhase {
    Submitted,
    Polling,
    Completed,
    Failed,
    TimedOut,
}

impl JobPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobPhase::Completed | JobPhase::Failed | JobPhase::TimedOut
        )
    }
}

/// How a polling run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Number of recommendations received
    Completed(usize),
    Failed(Option<String>),
    StatusCheckFailed(String),
    TimedOut,
}

impl fmt::Display for PollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollOutcome::Completed(count) => write!(f, "completed with {} recommendations", count),
            PollOutcome::Failed(Some(error)) => write!(f, "failed: {}", error),
            PollOutcome::Failed(None) => f.write_str("failed"),
            PollOutcome::StatusCheckFailed(reason) => write!(f, "status check failed: {}", reason),
            PollOutcome::TimedOut => f.write_str("timed out"),
        }
    }
}

pub struct JobPoller {
    config: PollingConfig,
    clock: Arc<dyn Clock>,
    sleeper: Arc<dyn Sleeper>,
}

impl JobPoller {
    pub fn new(config: PollingConfig) -> Self {
        let timer = Arc::new(TokioTimer);
        Self::with_timer(config, timer.clone(), timer)
    }

    pub fn with_timer(
        config: PollingConfig,
        clock: Arc<dyn Clock>,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        Self {
            config,
            clock,
            sleeper,
        }
    }

    /// Poll `job` to one of its exits, publishing progress into `store`.
    pub async fn poll(
        &self,
        gateway: &dyn GatewayApi,
        store: &UiStore,
        job: &QueuedJob,
    ) -> PollOutcome {
        let job_id = job.job_id.clone();
        let deadline = self.clock.now() + self.config.timeout;

        while self.clock.now() < deadline {
            store
                .dispatch(UiEvent::JobPolled {
                    job_id: job_id.clone(),
                })
                .await;

            let response = match gateway.job_status(&job_id, &job.bearer).await {
                Ok(response) => response,
                Err(e) => {
                    warn!("Status check for job {} failed: {}", job_id, e);
                    let reason = e.status_text();
                    store
                        .dispatch(UiEvent::StatusCheckFailed {
                            job_id,
                            reason: reason.clone(),
                        })
                        .await;
                    return PollOutcome::StatusCheckFailed(reason);
                }
            };

            match response.status {
                JobStatus::Completed => {
                    let recommendations = response.into_recommendations();
                    let count = recommendations.len();
                    info!("Job {} completed with {} recommendations", job_id, count);
                    store
                        .dispatch(UiEvent::JobCompleted {
                            job_id,
                            recommendations,
                        })
                        .await;
                    return PollOutcome::Completed(count);
                }
                JobStatus::Failed => {
                    let error = response.error;
                    warn!(
                        "Job {} failed: {}",
                        job_id,
                        error.as_deref().unwrap_or("no error given")
                    );
                    store
                        .dispatch(UiEvent::JobFailed {
                            job_id,
                            error: error.clone(),
                        })
                        .await;
                    return PollOutcome::Failed(error);
                }
                JobStatus::Pending(ref raw) => {
                    debug!("Job {} is {}", job_id, raw);
                }
            }

            self.sleeper.sleep(self.config.interval).await;
        }

        warn!(
            "Job {} still not finished after {:?}, giving up",
            job_id, self.config.timeout
        );
        store.dispatch(UiEvent::JobTimedOut { job_id }).await;
        PollOutcome::TimedOut
    }
}
