//! Domain catalog types.

use serde::Deserialize;

/// A mail domain offered by the provider.
///
/// Sourced entirely from the remote catalog; immutable once fetched. Only
/// domains with `is_active` set are eligible for account creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    /// The domain name (e.g. "example.com").
    pub domain: String,
    /// Whether the provider currently permits registrations under this domain.
    #[serde(default)]
    pub is_active: bool,
    /// Whether the domain is reserved for paying customers.
    #[serde(default)]
    pub is_private: bool,
}

/// Collection wrapper used by the provider for the domain catalog.
#[derive(Debug, Deserialize)]
pub struct DomainCollection {
    /// The wrapped domain entries.
    #[serde(rename = "hydra:member", default)]
    pub members: Vec<Domain>,
}
