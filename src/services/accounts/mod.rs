//! Account provisioning.

mod credentials;
mod service;

use crate::error::TempMailResult;
use crate::types::{CreateAccountRequest, Session};
use async_trait::async_trait;

pub use credentials::{random_password, random_username};
pub use service::AccountsServiceImpl;

/// Service for provisioning mailbox accounts.
#[async_trait]
pub trait AccountsService: Send + Sync {
    /// Provision a mailbox account and return the resulting session.
    ///
    /// Fails with a distinct error kind for each provisioning failure: no
    /// active domains, custom username unavailable, random-mode retry budget
    /// exhausted, unexpected creation status, or a rejected login.
    async fn create(&self, request: CreateAccountRequest) -> TempMailResult<Session>;
}
