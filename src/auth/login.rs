//! Login client
//!
//! One attempt per form submission, no retry.

use tracing::{info, warn};

use super::models::Credentials;
use crate::gateway::GatewayApi;
use crate::ui::{UiEvent, UiStore};

/// Exchange credentials for a token bundle and install it in the session.
///
/// A failed login leaves the current session untouched and reports the
/// gateway's status code in the status line.
pub async fn login(gateway: &dyn GatewayApi, store: &UiStore, credentials: Credentials) {
    store.dispatch(UiEvent::LoginStarted).await;

    match gateway.login(&credentials).await {
        Ok(bundle) => {
            info!(
                "Logged in as user {} ({} token, expires in {}s)",
                bundle.user_id, bundle.token_type, bundle.expires_in
            );
            store.dispatch(UiEvent::LoggedIn(bundle)).await;
        }
        Err(e) => {
            warn!("Login for {} failed: {}", credentials.email, e);
            store.dispatch(UiEvent::LoginFailed(e.status_text())).await;
        }
    }
}
