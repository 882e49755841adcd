use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use super::state::{UiEvent, UiState};

/// Shared handle to the UI state. Clients and pollers only ever change the
/// state through [`UiStore::dispatch`]; the lock is never held across an
/// await on the network.
#[derive(Clone, Default)]
pub struct UiStore {
    inner: Arc<RwLock<UiState>>,
}

impl UiStore {
    pub async fn dispatch(&self, event: UiEvent) {
        let mut state = self.inner.write().await;
        state.apply(event);
        debug!("UI status: {}", state.status);
    }

    pub async fn snapshot(&self) -> UiState {
        self.inner.read().await.clone()
    }

    /// Current bearer token, `None` while logged out
    pub async fn bearer(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .session
            .bearer()
            .map(str::to_string)
    }
}
