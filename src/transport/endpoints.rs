//! Endpoint path constants and builder functions for the mail provider API.

/// Path for the domain catalog.
pub const DOMAINS: &str = "/domains";

/// Path for account creation.
pub const ACCOUNTS: &str = "/accounts";

/// Path for the bearer-token exchange.
pub const TOKEN: &str = "/token";

/// Path for the authenticated account metadata.
pub const ME: &str = "/me";

/// Path for the message collection.
pub const MESSAGES: &str = "/messages";

/// Constructs the path for a specific message.
///
/// # Example
///
/// ```
/// use integrations_tempmail::transport::endpoints;
///
/// let path = endpoints::message("abc123");
/// assert_eq!(path, "/messages/abc123");
/// ```
pub fn message(id: &str) -> String {
    format!("{}/{}", MESSAGES, id)
}
