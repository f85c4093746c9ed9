//! Messages service implementation.

use super::MessagesService;
use crate::auth::{AuthManager, BearerAuthManager};
use crate::config::TempMailConfig;
use crate::error::TempMailError;
use crate::resilience::ResilientFetcher;
use crate::transport::{endpoints, HttpRequest};
use crate::types::{MessageCollection, MessageDetail, MessageDetailWire, MessageSummary, Session};
use async_trait::async_trait;
use std::sync::Arc;

/// Implementation of the MessagesService.
pub struct MessagesServiceImpl {
    config: Arc<TempMailConfig>,
    fetcher: Arc<ResilientFetcher>,
}

impl MessagesServiceImpl {
    /// Create a new messages service implementation.
    pub fn new(config: Arc<TempMailConfig>, fetcher: Arc<ResilientFetcher>) -> Self {
        Self { config, fetcher }
    }

    fn api_url(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.config.base_url.as_str().trim_end_matches('/'),
            path
        )
    }

    fn authed_get(&self, session: &Session, path: &str) -> HttpRequest {
        let mut request = HttpRequest::get(self.api_url(path));
        let auth = BearerAuthManager::new(session.token.clone());
        if let Some((name, value)) = auth.get_auth_header() {
            request = request.with_header(name, value);
        }
        request
    }

    async fn try_list(&self, session: &Session) -> Result<Vec<MessageSummary>, TempMailError> {
        let response = self
            .fetcher
            .send(self.authed_get(session, endpoints::MESSAGES))
            .await?;
        if !response.is_success() {
            return Err(TempMailError::Response {
                message: format!("Message listing returned status {}", response.status),
            });
        }

        let collection: MessageCollection = serde_json::from_slice(&response.body)?;
        Ok(collection
            .members
            .into_iter()
            .map(|m| m.into_summary())
            .collect())
    }

    async fn try_detail(
        &self,
        session: &Session,
        id: &str,
    ) -> Result<MessageDetail, TempMailError> {
        let response = self
            .fetcher
            .send(self.authed_get(session, &endpoints::message(id)))
            .await?;
        if !response.is_success() {
            return Err(TempMailError::Response {
                message: format!("Message detail returned status {}", response.status),
            });
        }

        let wire: MessageDetailWire = serde_json::from_slice(&response.body)?;
        Ok(wire.into_detail())
    }
}

#[async_trait]
impl MessagesService for MessagesServiceImpl {
    async fn list(&self, session: &Session) -> Vec<MessageSummary> {
        match self.try_list(session).await {
            Ok(messages) => messages,
            Err(err) => {
                tracing::warn!(error = %err, "Message listing failed");
                Vec::new()
            }
        }
    }

    async fn detail(&self, session: &Session, id: &str) -> Option<MessageDetail> {
        match self.try_detail(session, id).await {
            Ok(detail) => Some(detail),
            Err(err) => {
                tracing::warn!(error = %err, message_id = id, "Message detail fetch failed");
                None
            }
        }
    }

    async fn delete(&self, session: &Session, id: &str) -> bool {
        let mut request = HttpRequest::delete(self.api_url(&endpoints::message(id)));
        let auth = BearerAuthManager::new(session.token.clone());
        if let Some((name, value)) = auth.get_auth_header() {
            request = request.with_header(name, value);
        }

        match self.fetcher.send(request).await {
            Ok(response) if response.is_success() => true,
            Ok(response) => {
                tracing::warn!(status = response.status, message_id = id, "Delete rejected");
                false
            }
            Err(err) => {
                tracing::warn!(error = %err, message_id = id, "Delete failed");
                false
            }
        }
    }
}
