//! Session and account-provisioning types.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Parameters for provisioning a mailbox account.
#[derive(Debug, Clone, Default)]
pub struct CreateAccountRequest {
    /// User-chosen username (premium mode). `None` provisions a random address.
    pub username: Option<String>,
    /// Explicit domain, used verbatim without catalog validation.
    pub domain: Option<String>,
}

impl CreateAccountRequest {
    /// Request a random (anonymous) mailbox.
    pub fn random() -> Self {
        Self::default()
    }

    /// Request a mailbox with a user-chosen username.
    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            domain: None,
        }
    }

    /// Pin the request to a specific domain.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}

/// A provisioned mailbox session.
///
/// Created once per provisioning call and replaced wholesale when the user
/// requests a new address; never mutated in place. The token is the sole
/// credential for message operations and is never logged or persisted.
#[derive(Clone)]
pub struct Session {
    /// The full email address (e.g. "abc123@example.com").
    pub email_address: String,
    /// When the session was provisioned.
    pub created_at: DateTime<Utc>,
    /// When the session expires; `None` means unlimited (premium).
    pub expires_at: Option<DateTime<Utc>>,
    /// Whether the session was created with a user-chosen username.
    pub is_premium: bool,
    /// Bearer token for all message operations.
    pub token: SecretString,
    /// Provider-assigned account identifier.
    pub account_id: String,
    /// The generated account password.
    pub password: SecretString,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("email_address", &self.email_address)
            .field("created_at", &self.created_at)
            .field("expires_at", &self.expires_at)
            .field("is_premium", &self.is_premium)
            .field("account_id", &self.account_id)
            .finish_non_exhaustive()
    }
}

/// Request body for `POST /accounts`.
#[derive(Debug, Serialize)]
pub struct CreateAccountBody {
    /// The full address to register.
    pub address: String,
    /// The account password.
    pub password: String,
}

/// Request body for `POST /token`.
#[derive(Debug, Serialize)]
pub struct TokenRequestBody {
    /// The registered address.
    pub address: String,
    /// The account password.
    pub password: String,
}

/// Response body of `POST /accounts`.
#[derive(Debug, Deserialize)]
pub struct AccountWire {
    /// Provider-assigned account identifier.
    #[serde(default)]
    pub id: String,
    /// The registered address as echoed by the provider.
    #[serde(default)]
    pub address: String,
}

/// Response body of `POST /token`.
#[derive(Debug, Deserialize)]
pub struct TokenWire {
    /// The bearer token.
    pub token: String,
}

/// Response body of `GET /me`.
#[derive(Debug, Deserialize)]
pub struct MeWire {
    /// The account identifier.
    pub id: String,
    /// The registered address.
    #[serde(default)]
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_debug_redacts_credentials() {
        let session = Session {
            email_address: "x@a.com".into(),
            created_at: Utc::now(),
            expires_at: None,
            is_premium: true,
            token: SecretString::new("secret-token".into()),
            account_id: "id1".into(),
            password: SecretString::new("secret-pass".into()),
        };

        let rendered = format!("{:?}", session);
        assert!(rendered.contains("x@a.com"));
        assert!(!rendered.contains("secret-token"));
        assert!(!rendered.contains("secret-pass"));
    }

    #[test]
    fn test_create_account_request_builders() {
        let random = CreateAccountRequest::random();
        assert!(random.username.is_none());
        assert!(random.domain.is_none());

        let custom = CreateAccountRequest::with_username("alice").domain("a.com");
        assert_eq!(custom.username.as_deref(), Some("alice"));
        assert_eq!(custom.domain.as_deref(), Some("a.com"));
    }
}
