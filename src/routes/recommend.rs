//! Recommendation form handler

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::response::Redirect;
use serde::Deserialize;
use tracing::info;

use crate::recommend::{self, models::Mode, models::RecommendationParams};
use crate::server::AppState;
use crate::ui::UiEvent;
use crate::ui::state::{MAX_TOP_K, MIN_TOP_K};

#[derive(Debug, Deserialize)]
pub struct RecommendFormInput {
    pub mode: Mode,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub top_k: String,
}

impl RecommendFormInput {
    fn into_params(self, current_top_k: u32) -> RecommendationParams {
        RecommendationParams {
            mode: self.mode,
            query: self.query,
            top_k: parse_top_k(&self.top_k, current_top_k),
        }
    }
}

/// Read the Top K field within the same bounds the input element declares.
/// Anything that is not a whole number keeps `fallback`.
pub fn parse_top_k(raw: &str, fallback: u32) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(value) => value.clamp(i64::from(MIN_TOP_K), i64::from(MAX_TOP_K)) as u32,
        Err(_) => fallback,
    }
}

/// `POST /recommend`: submit the job, then follow it in the background.
///
/// The submission is awaited so the page the browser is redirected to
/// already shows whether a job was queued. Polling keeps running after the
/// response; the page refreshes itself until the job reaches an exit.
pub async fn submit_recommendation(
    State(state): State<AppState>,
    Form(input): Form<RecommendFormInput>,
) -> Redirect {
    let current_top_k = state.store.snapshot().await.recommend_form.top_k;
    let params = input.into_params(current_top_k);
    state
        .store
        .dispatch(UiEvent::RecommendFormEdited(params.clone()))
        .await;

    if let Some(job) = recommend::submit(state.gateway.as_ref(), &state.store, &params).await {
        let gateway = Arc::clone(&state.gateway);
        let poller = Arc::clone(&state.poller);
        let store = state.store.clone();
        tokio::spawn(async move {
            let outcome = poller.poll(gateway.as_ref(), &store, &job).await;
            info!("Job {} {}", job.job_id, outcome);
        });
    }

    Redirect::to("/")
}
