//! Recommendation Models
//!
//! Request and job types for the `/recommendations` endpoints.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Recommendation strategy; selects the endpoint the request is sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Collaborative,
    Nlp,
    Mood,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Collaborative, Mode::Nlp, Mode::Mood];

    /// Path segment used in `/recommendations/{mode}`
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Collaborative => "collaborative",
            Mode::Nlp => "nlp",
            Mode::Mood => "mood",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Collaborative => "Collaborative",
            Mode::Nlp => "NLP Search",
            Mode::Mood => "Mood",
        }
    }

    /// Label of the free-text field, which means something different per mode
    pub fn query_label(&self) -> &'static str {
        match self {
            Mode::Nlp => "Query",
            Mode::Mood => "Mood (happy/sad/neutral...)",
            Mode::Collaborative => "Query (optional)",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters as entered in the recommendation form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationParams {
    pub mode: Mode,
    pub query: String,
    pub top_k: u32,
}

/// JSON body of `POST /recommendations/{mode}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBody {
    pub top_k: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl RecommendationBody {
    pub fn from_params(params: &RecommendationParams) -> Self {
        let query = params.query.trim();
        Self {
            top_k: params.top_k,
            query: (!query.is_empty()).then(|| query.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub job_id: Option<String>,
}

#[cfg(test)]
impl SubmitResponse {
    pub fn queued(job_id: impl Into<String>) -> Self {
        Self {
            job_id: Some(job_id.into()),
        }
    }
}

/// Server-reported job status. Anything other than `completed` or `failed`
/// is a non-terminal state and keeps the poller going.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum JobStatus {
    Completed,
    Failed,
    Pending(String),
}

impl From<String> for JobStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "completed" => JobStatus::Completed,
            "failed" => JobStatus::Failed,
            _ => JobStatus::Pending(raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobStatusResponse {
    pub status: JobStatus,
    #[serde(default)]
    pub result: Option<JobResult>,
    #[serde(default)]
    pub error: Option<String>,
}

impl JobStatusResponse {
    /// Recommendations carried by a completed job, empty when none were sent
    pub fn into_recommendations(self) -> Vec<Recommendation> {
        self.result
            .and_then(|result| result.recommendations)
            .unwrap_or_default()
    }
}

#[cfg(test)]
impl JobStatusResponse {
    pub fn pending(raw: &str) -> Self {
        Self {
            status: JobStatus::Pending(raw.to_string()),
            result: None,
            error: None,
        }
    }

    pub fn completed(recommendations: Vec<Recommendation>) -> Self {
        Self {
            status: JobStatus::Completed,
            result: Some(JobResult {
                recommendations: Some(recommendations),
            }),
            error: None,
        }
    }

    pub fn failed(error: Option<&str>) -> Self {
        Self {
            status: JobStatus::Failed,
            result: None,
            error: error.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JobResult {
    /// Absent and `null` both mean no recommendations
    #[serde(default)]
    pub recommendations: Option<Vec<Recommendation>>,
}

/// A single recommended movie, kept in the order the server sent it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub movie_id: i64,
    pub title: String,
    pub score: f64,
    pub reason: String,
}
