//! In-memory session state. Nothing here is persisted; the session ends with
//! the process.

use super::models::TokenBundle;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Empty means unauthenticated
    access_token: String,
    user_id: Option<i64>,
}

impl Session {
    /// Replace the current token with the one from a fresh login
    pub fn establish(&mut self, bundle: &TokenBundle) {
        self.access_token = bundle.access_token.clone();
        self.user_id = Some(bundle.user_id);
    }

    pub fn is_authenticated(&self) -> bool {
        !self.access_token.is_empty()
    }

    /// Token to send as `Authorization: Bearer`, if there is one
    pub fn bearer(&self) -> Option<&str> {
        if self.is_authenticated() {
            Some(&self.access_token)
        } else {
            None
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user_id
    }
}
