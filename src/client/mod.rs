//! Main client interface and factory functions.

mod builder;
mod client;

use crate::error::TempMailResult;
use crate::types::{
    AnalysisReport, CreateAccountRequest, Domain, MessageDetail, MessageSummary, Session,
};
use async_trait::async_trait;

pub use builder::TempMailClientBuilder;
pub use client::TempMailClientImpl;

use crate::config::TempMailConfig;
use std::sync::Arc;

/// High-level client for a disposable-mailbox provider.
///
/// Provisioning calls are independent: nothing prevents two concurrent
/// `create_account` calls, and the caller's session state follows
/// last-writer-wins. UIs should disable concurrent triggers.
#[async_trait]
pub trait TempMailClient: Send + Sync {
    /// Provision a mailbox account.
    async fn create_account(&self, request: CreateAccountRequest) -> TempMailResult<Session>;

    /// List the currently active domains. Empty on any failure.
    async fn list_active_domains(&self) -> Vec<Domain>;

    /// List inbox messages, newest-first. Empty on any failure.
    async fn list_messages(&self, session: &Session) -> Vec<MessageSummary>;

    /// Fetch a message with its resolved body. `None` on any failure.
    async fn message_detail(&self, session: &Session, id: &str) -> Option<MessageDetail>;

    /// Best-effort delete. `false` on any failure.
    async fn delete_message(&self, session: &Session, id: &str) -> bool;

    /// Analyze message content for safety. Degrades to a canned report.
    async fn analyze_message(&self, subject: &str, body: &str) -> AnalysisReport;
}

/// Create a client from the given configuration.
pub fn create_client(config: TempMailConfig) -> TempMailResult<Arc<dyn TempMailClient>> {
    let client = TempMailClientBuilder::from_config(config).build()?;
    Ok(Arc::new(client))
}

/// Create a client from environment variables.
pub fn create_client_from_env() -> TempMailResult<Arc<dyn TempMailClient>> {
    create_client(TempMailConfig::from_env()?)
}
