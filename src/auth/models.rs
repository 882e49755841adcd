//! Authentication Models
//!
//! Wire types exchanged with the gateway's `/auth/login` endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Login request payload
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Token bundle returned after successful authentication
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenBundle {
    pub access_token: String,
    /// Issued by the gateway but never used by this frontend
    #[allow(dead_code)]
    pub refresh_token: String,
    pub token_type: String,
    pub user_id: i64,
    /// Lifetime of the access token in seconds
    pub expires_in: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_bundle_parses_login_response() {
        let body = r#"{
            "access_token": "acc",
            "refresh_token": "ref",
            "token_type": "bearer",
            "user_id": 7,
            "expires_in": 900
        }"#;

        let bundle: TokenBundle = serde_json::from_str(body).unwrap();

        assert_eq!(bundle.access_token, "acc");
        assert_eq!(bundle.user_id, 7);
        assert_eq!(bundle.expires_in, 900);
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let credentials = Credentials::new("a@b.c", "hunter2");
        let printed = format!("{:?}", credentials);

        assert!(printed.contains("a@b.c"));
        assert!(!printed.contains("hunter2"));
    }
}
