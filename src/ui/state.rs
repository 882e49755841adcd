//! UI state container and the reducer that applies events to it.

use tracing::debug;

use crate::auth::models::{Credentials, TokenBundle};
use crate::auth::session::Session;
use crate::recommend::models::{Mode, Recommendation, RecommendationParams};
use crate::recommend::poller::JobPhase;

pub const DEFAULT_EMAIL: &str = "ml_user_1@moviematch.local";
pub const DEFAULT_PASSWORD: &str = "moviematch";
pub const DEFAULT_QUERY: &str = "space";
pub const DEFAULT_TOP_K: u32 = 5;
pub const MIN_TOP_K: u32 = 1;
pub const MAX_TOP_K: u32 = 20;

/// Progress of the most recently queued job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobProgress {
    pub job_id: String,
    pub phase: JobPhase,
    pub polls: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub login_form: Credentials,
    pub recommend_form: RecommendationParams,
    pub session: Session,
    pub recommendations: Vec<Recommendation>,
    pub status: String,
    pub job: Option<JobProgress>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            login_form: Credentials::new(DEFAULT_EMAIL, DEFAULT_PASSWORD),
            recommend_form: RecommendationParams {
                mode: Mode::Collaborative,
                query: DEFAULT_QUERY.to_string(),
                top_k: DEFAULT_TOP_K,
            },
            session: Session::default(),
            recommendations: Vec::new(),
            status: "Ready".to_string(),
            job: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    LoginFormEdited(Credentials),
    RecommendFormEdited(RecommendationParams),
    LoginStarted,
    LoggedIn(TokenBundle),
    LoginFailed(String),
    NotAuthenticated,
    SubmitStarted,
    SubmitFailed(String),
    MissingJobId,
    JobQueued { job_id: String },
    JobPolled { job_id: String },
    JobCompleted { job_id: String, recommendations: Vec<Recommendation> },
    JobFailed { job_id: String, error: Option<String> },
    StatusCheckFailed { job_id: String, reason: String },
    JobTimedOut { job_id: String },
}

impl UiEvent {
    /// Job the event belongs to, for events emitted by a poller
    fn job_id(&self) -> Option<&str> {
        match self {
            UiEvent::JobPolled { job_id }
            | UiEvent::JobCompleted { job_id, .. }
            | UiEvent::JobFailed { job_id, .. }
            | UiEvent::StatusCheckFailed { job_id, .. }
            | UiEvent::JobTimedOut { job_id } => Some(job_id.as_str()),
            _ => None,
        }
    }
}

impl UiState {
    pub fn is_polling(&self) -> bool {
        self.job
            .as_ref()
            .is_some_and(|job| !job.phase.is_terminal())
    }

    fn is_current_job(&self, job_id: &str) -> bool {
        self.job.as_ref().is_some_and(|job| job.job_id == job_id)
    }

    fn finish_job(&mut self, phase: JobPhase) {
        if let Some(job) = self.job.as_mut() {
            job.phase = phase;
        }
    }

    pub fn apply(&mut self, event: UiEvent) {
        // a poller for a job that has since been replaced must not touch the page
        if let Some(job_id) = event.job_id() {
            if !self.is_current_job(job_id) {
                debug!("Dropping event for superseded job {}", job_id);
                return;
            }
        }

        match event {
            UiEvent::LoginFormEdited(credentials) => self.login_form = credentials,
            UiEvent::RecommendFormEdited(params) => self.recommend_form = params,
            UiEvent::LoginStarted => self.status = "Logging in...".to_string(),
            UiEvent::LoggedIn(bundle) => {
                self.session.establish(&bundle);
                self.status = format!("Logged in as user {}", bundle.user_id);
            }
            UiEvent::LoginFailed(reason) => self.status = format!("Login failed: {}", reason),
            UiEvent::NotAuthenticated => self.status = "Login first".to_string(),
            UiEvent::SubmitStarted => self.status = "Fetching recommendations...".to_string(),
            UiEvent::SubmitFailed(reason) => {
                self.status = format!("Recommendation failed: {}", reason);
                self.recommendations.clear();
            }
            UiEvent::MissingJobId => {
                self.status = "Recommendation failed: no job_id".to_string();
            }
            UiEvent::JobQueued { job_id } => {
                self.status = format!("Job queued: {}", job_id);
                self.job = Some(JobProgress {
                    job_id,
                    phase: JobPhase::Submitted,
                    polls: 0,
                });
            }
            UiEvent::JobPolled { .. } => {
                if let Some(job) = self.job.as_mut() {
                    job.phase = JobPhase::Polling;
                    job.polls += 1;
                }
            }
            UiEvent::JobCompleted {
                recommendations, ..
            } => {
                self.status = format!("Done: {} items", recommendations.len());
                self.recommendations = recommendations;
                self.finish_job(JobPhase::Completed);
            }
            UiEvent::JobFailed { error, .. } => {
                self.status = format!(
                    "Job failed: {}",
                    error.as_deref().unwrap_or("unknown error")
                );
                self.recommendations.clear();
                self.finish_job(JobPhase::Failed);
            }
            UiEvent::StatusCheckFailed { reason, .. } => {
                self.status = format!("Status check failed: {}", reason);
                self.recommendations.clear();
                self.finish_job(JobPhase::Failed);
            }
            UiEvent::JobTimedOut { .. } => {
                self.status = "Recommendation job timed out".to_string();
                self.recommendations.clear();
                self.finish_job(JobPhase::TimedOut);
            }
        }
    }
}
