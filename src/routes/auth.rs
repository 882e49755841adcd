//! Login form handler

use axum::extract::{Form, State};
use axum::response::Redirect;

use crate::auth::{self, models::Credentials};
use crate::server::AppState;
use crate::ui::UiEvent;

/// `POST /login`: keep what was typed, log in, and go back to the page
pub async fn submit_login(
    State(state): State<AppState>,
    Form(credentials): Form<Credentials>,
) -> Redirect {
    state
        .store
        .dispatch(UiEvent::LoginFormEdited(credentials.clone()))
        .await;
    auth::login(state.gateway.as_ref(), &state.store, credentials).await;
    Redirect::to("/")
}
