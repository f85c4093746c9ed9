//! Authentication for the mail provider API.
//!
//! Every authenticated endpoint takes a bearer token obtained from the
//! `/token` exchange during provisioning. The token is the sole credential for
//! message operations and is held as a [`SecretString`] so it never appears in
//! logs or debug output.

use secrecy::{ExposeSecret, SecretString};

/// Authentication manager for the mail provider API.
pub trait AuthManager: Send + Sync {
    /// Get the authentication header name and value.
    fn get_auth_header(&self) -> Option<(String, String)>;

    /// Clone the auth manager into a boxed trait object.
    fn clone_box(&self) -> Box<dyn AuthManager>;
}

/// Bearer-token authentication manager.
pub struct BearerAuthManager {
    token: SecretString,
}

impl BearerAuthManager {
    /// Create a new bearer auth manager from a session token.
    pub fn new(token: SecretString) -> Self {
        Self { token }
    }
}

impl AuthManager for BearerAuthManager {
    fn get_auth_header(&self) -> Option<(String, String)> {
        Some((
            "Authorization".to_string(),
            format!("Bearer {}", self.token.expose_secret()),
        ))
    }

    fn clone_box(&self) -> Box<dyn AuthManager> {
        Box::new(Self {
            token: self.token.clone(),
        })
    }
}

/// No-op auth manager for unauthenticated endpoints.
pub struct NoAuthManager;

impl AuthManager for NoAuthManager {
    fn get_auth_header(&self) -> Option<(String, String)> {
        None
    }

    fn clone_box(&self) -> Box<dyn AuthManager> {
        Box::new(NoAuthManager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_auth_header() {
        let manager = BearerAuthManager::new(SecretString::new("abc123".into()));

        let header = manager.get_auth_header();
        assert!(header.is_some());
        let (name, value) = header.unwrap();
        assert_eq!(name, "Authorization");
        assert_eq!(value, "Bearer abc123");
    }

    #[test]
    fn test_no_auth_header() {
        assert!(NoAuthManager.get_auth_header().is_none());
    }
}
