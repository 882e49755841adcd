//! Recommendation request client
//!
//! Submits a recommendation job for the logged-in user and hands back the job
//! id for polling.

use tracing::{info, warn};

use super::models::{RecommendationBody, RecommendationParams};
use crate::gateway::GatewayApi;
use crate::ui::{UiEvent, UiStore};

/// A job accepted by the gateway, with the token it was submitted under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedJob {
    pub job_id: String,
    pub bearer: String,
}

/// Submit a recommendation job.
///
/// Without a token this only reports "Login first" and makes no request.
/// Returns `None` whenever there is nothing to poll.
pub async fn submit(
    gateway: &dyn GatewayApi,
    store: &UiStore,
    params: &RecommendationParams,
) -> Option<QueuedJob> {
    let Some(bearer) = store.bearer().await else {
        store.dispatch(UiEvent::NotAuthenticated).await;
        return None;
    };

    store.dispatch(UiEvent::SubmitStarted).await;

    let body = RecommendationBody::from_params(params);
    let response = match gateway.submit(params.mode, &body, &bearer).await {
        Ok(response) => response,
        Err(e) => {
            warn!("Recommendation request ({}) failed: {}", params.mode, e);
            store.dispatch(UiEvent::SubmitFailed(e.status_text())).await;
            return None;
        }
    };

    match response.job_id.filter(|id| !id.is_empty()) {
        Some(job_id) => {
            info!("Queued {} recommendation job {}", params.mode, job_id);
            store
                .dispatch(UiEvent::JobQueued {
                    job_id: job_id.clone(),
                })
                .await;
            Some(QueuedJob { job_id, bearer })
        }
        None => {
            warn!("Recommendation response for {} carried no job_id", params.mode);
            store.dispatch(UiEvent::MissingJobId).await;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::fake::{Call, FakeGateway, token_bundle};
    use crate::recommend::models::{Mode, Recommendation, SubmitResponse};

    fn params(mode: Mode, query: &str) -> RecommendationParams {
        RecommendationParams {
            mode,
            query: query.to_string(),
            top_k: 7,
        }
    }

    async fn logged_in() -> UiStore {
        let store = UiStore::default();
        store.dispatch(UiEvent::LoggedIn(token_bundle("tok", 1))).await;
        store
    }

    #[tokio::test]
    async fn test_no_token_means_no_request() {
        let gateway = FakeGateway::new().with_submit(Ok(SubmitResponse::queued("j1")));
        let store = UiStore::default();

        let job = submit(&gateway, &store, &params(Mode::Nlp, "space")).await;

        assert!(job.is_none());
        assert!(gateway.calls().is_empty());
        assert_eq!(store.snapshot().await.status, "Login first");
    }

    #[tokio::test]
    async fn test_submit_sends_mode_body_and_bearer() {
        let gateway = FakeGateway::new().with_submit(Ok(SubmitResponse::queued("j1")));
        let store = logged_in().await;

        let job = submit(&gateway, &store, &params(Mode::Mood, "  happy ")).await;

        assert_eq!(
            job,
            Some(QueuedJob {
                job_id: "j1".to_string(),
                bearer: "tok".to_string()
            })
        );
        assert_eq!(
            gateway.calls(),
            vec![Call::Submit {
                mode: Mode::Mood,
                body: RecommendationBody {
                    top_k: 7,
                    query: Some("happy".to_string())
                },
                bearer: "tok".to_string(),
            }]
        );
        assert_eq!(store.snapshot().await.status, "Job queued: j1");
    }

    #[tokio::test]
    async fn test_blank_query_is_left_out() {
        let gateway = FakeGateway::new().with_submit(Ok(SubmitResponse::queued("j1")));
        let store = logged_in().await;

        submit(&gateway, &store, &params(Mode::Collaborative, "   ")).await;

        match &gateway.calls()[0] {
            Call::Submit { body, .. } => assert_eq!(body.query, None),
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rejected_submit_clears_results() {
        let gateway = FakeGateway::new().with_submit(Err(503));
        let store = logged_in().await;
        store
            .dispatch(UiEvent::JobQueued {
                job_id: "prev".to_string(),
            })
            .await;
        store
            .dispatch(UiEvent::JobCompleted {
                job_id: "prev".to_string(),
                recommendations: vec![Recommendation {
                    movie_id: 1,
                    title: "Alien".to_string(),
                    score: 0.8,
                    reason: "space".to_string(),
                }],
            })
            .await;

        let job = submit(&gateway, &store, &params(Mode::Nlp, "space")).await;

        let state = store.snapshot().await;
        assert!(job.is_none());
        assert_eq!(state.status, "Recommendation failed: 503");
        assert!(state.recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_missing_job_id_stops_before_polling() {
        for response in [SubmitResponse::default(), SubmitResponse::queued("")] {
            let gateway = FakeGateway::new().with_submit(Ok(response));
            let store = logged_in().await;

            let job = submit(&gateway, &store, &params(Mode::Nlp, "space")).await;

            assert!(job.is_none());
            assert_eq!(
                store.snapshot().await.status,
                "Recommendation failed: no job_id"
            );
            assert_eq!(gateway.status_calls(), 0);
        }
    }
}
