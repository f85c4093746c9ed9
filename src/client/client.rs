//! Client implementation wiring the services together.

use super::TempMailClient;
use crate::error::TempMailResult;
use crate::services::{
    AccountsService, ContentAnalyzer, DomainsService, MessagesService,
};
use crate::types::{
    AnalysisReport, CreateAccountRequest, Domain, MessageDetail, MessageSummary, Session,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Default client implementation delegating to the service layer.
pub struct TempMailClientImpl {
    pub(super) domains: Arc<dyn DomainsService>,
    pub(super) accounts: Arc<dyn AccountsService>,
    pub(super) messages: Arc<dyn MessagesService>,
    pub(super) analyzer: Arc<dyn ContentAnalyzer>,
}

#[async_trait]
impl TempMailClient for TempMailClientImpl {
    async fn create_account(&self, request: CreateAccountRequest) -> TempMailResult<Session> {
        self.accounts.create(request).await
    }

    async fn list_active_domains(&self) -> Vec<Domain> {
        self.domains.list_active().await
    }

    async fn list_messages(&self, session: &Session) -> Vec<MessageSummary> {
        self.messages.list(session).await
    }

    async fn message_detail(&self, session: &Session, id: &str) -> Option<MessageDetail> {
        self.messages.detail(session, id).await
    }

    async fn delete_message(&self, session: &Session, id: &str) -> bool {
        self.messages.delete(session, id).await
    }

    async fn analyze_message(&self, subject: &str, body: &str) -> AnalysisReport {
        self.analyzer.analyze(subject, body).await
    }
}
