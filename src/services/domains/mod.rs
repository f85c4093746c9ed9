//! Domain catalog discovery.

mod service;

use crate::types::Domain;
use async_trait::async_trait;

pub use service::DomainsServiceImpl;

/// Service for discovering domains eligible for account creation.
#[async_trait]
pub trait DomainsService: Send + Sync {
    /// List the currently active domains.
    ///
    /// Never errors: any failure along the way degrades to an empty list.
    async fn list_active(&self) -> Vec<Domain>;
}
