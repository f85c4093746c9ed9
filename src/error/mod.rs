//! Error types for the temp-mail client.
//!
//! Provisioning surfaces a small set of distinct error kinds so callers can
//! branch on cause (prompt for a different username, retry later, ...) rather
//! than on message text. Read-path operations never produce these errors; they
//! degrade to empty/`None`/`false` results at the service layer.

use crate::transport::TransportError;
use thiserror::Error;

/// Result type alias for temp-mail operations.
pub type TempMailResult<T> = Result<T, TempMailError>;

/// Top-level error type for the temp-mail integration.
#[derive(Debug, Clone, Error)]
pub enum TempMailError {
    /// Invalid or missing client configuration.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What was wrong with the configuration.
        message: String,
    },

    /// The domain catalog yielded no active domains after all discovery attempts.
    #[error("No domains available for account creation")]
    NoDomainsAvailable,

    /// The requested custom username is already registered or rejected by the provider.
    #[error("Username '{username}' is unavailable")]
    UsernameUnavailable {
        /// The username that was rejected.
        username: String,
    },

    /// Every randomly generated username collided within the retry budget.
    #[error("Could not create account after {attempts} attempts")]
    CreationExhausted {
        /// Number of creation attempts issued.
        attempts: u32,
    },

    /// Account creation failed with an unexpected HTTP status.
    #[error("Account creation failed with status {status}")]
    CreationFailed {
        /// The HTTP status returned by the provider.
        status: u16,
    },

    /// The token exchange or account-metadata fetch was rejected.
    #[error("Login failed with status {status}")]
    LoginFailed {
        /// The HTTP status returned by the provider.
        status: u16,
    },

    /// The request never produced a usable response.
    #[error("Network error: {message}")]
    Network {
        /// Underlying transport failure description.
        message: String,
    },

    /// The provider returned a body the client could not interpret.
    #[error("Response error: {message}")]
    Response {
        /// What could not be parsed.
        message: String,
    },
}

impl TempMailError {
    /// Returns true when the error calls for a user decision (pick another
    /// username, try again later) rather than an automatic retry.
    pub fn is_user_actionable(&self) -> bool {
        matches!(
            self,
            TempMailError::NoDomainsAvailable
                | TempMailError::UsernameUnavailable { .. }
                | TempMailError::CreationExhausted { .. }
        )
    }
}

impl From<TransportError> for TempMailError {
    fn from(err: TransportError) -> Self {
        TempMailError::Network {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TempMailError {
    fn from(err: serde_json::Error) -> Self {
        TempMailError::Response {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for TempMailError {
    fn from(err: url::ParseError) -> Self {
        TempMailError::Configuration {
            message: format!("Invalid URL: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_actionable_classification() {
        assert!(TempMailError::NoDomainsAvailable.is_user_actionable());
        assert!(TempMailError::UsernameUnavailable {
            username: "alice".into()
        }
        .is_user_actionable());
        assert!(TempMailError::CreationExhausted { attempts: 5 }.is_user_actionable());

        assert!(!TempMailError::CreationFailed { status: 500 }.is_user_actionable());
        assert!(!TempMailError::LoginFailed { status: 401 }.is_user_actionable());
        assert!(!TempMailError::Network {
            message: "refused".into()
        }
        .is_user_actionable());
    }

    #[test]
    fn test_transport_error_conversion() {
        let err: TempMailError = TransportError::Timeout.into();
        assert!(matches!(err, TempMailError::Network { .. }));
    }
}
