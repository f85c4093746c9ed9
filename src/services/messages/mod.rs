//! Message listing, detail fetch and deletion.

mod service;

use crate::types::{MessageDetail, MessageSummary, Session};
use async_trait::async_trait;

pub use service::MessagesServiceImpl;

/// Service for message operations against a provisioned session.
///
/// All operations follow the soft-failure contract: a transient failure is
/// indistinguishable from "no data" at this layer, and nothing here errors.
#[async_trait]
pub trait MessagesService: Send + Sync {
    /// List inbox messages, newest-first. Empty on any failure.
    async fn list(&self, session: &Session) -> Vec<MessageSummary>;

    /// Fetch a message with its resolved body. `None` on any failure.
    async fn detail(&self, session: &Session, id: &str) -> Option<MessageDetail>;

    /// Best-effort delete. `false` on any failure.
    async fn delete(&self, session: &Session, id: &str) -> bool;
}
