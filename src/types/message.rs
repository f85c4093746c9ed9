//! Message types: list summaries, full details, and wire formats.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Body text used when a message carries neither HTML nor plain text.
pub const NO_CONTENT_SENTINEL: &str = "(no content)";

/// Sender identity as reported by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MessageSender {
    /// Display name, when present.
    #[serde(default)]
    pub name: String,
    /// The sender's address.
    #[serde(default)]
    pub address: String,
}

/// A message as it appears in the inbox listing.
///
/// `has_full_details` starts out false; the detail fetch upgrades the record
/// with a resolved body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSummary {
    /// Provider-assigned message identifier.
    pub id: String,
    /// Sender display name.
    pub sender: String,
    /// Sender address.
    pub sender_address: String,
    /// Subject line.
    pub subject: String,
    /// Short preview of the body.
    pub preview: String,
    /// When the message was received.
    pub received_at: Option<DateTime<Utc>>,
    /// Whether the message has been read.
    pub is_read: bool,
    /// Whether the full body has been fetched.
    pub has_full_details: bool,
}

/// A message with its fully resolved body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDetail {
    /// The summary fields.
    pub summary: MessageSummary,
    /// Resolved body: HTML when available, plain text otherwise.
    pub body: String,
}

/// A message entry on the wire (`GET /messages`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageWire {
    /// Message identifier.
    pub id: String,
    /// Sender identity.
    #[serde(default)]
    pub from: MessageSender,
    /// Subject line.
    #[serde(default)]
    pub subject: String,
    /// Body preview.
    #[serde(default)]
    pub intro: String,
    /// Read marker.
    #[serde(default)]
    pub seen: bool,
    /// Receive timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl MessageWire {
    /// Convert a wire entry into a listing summary.
    pub fn into_summary(self) -> MessageSummary {
        MessageSummary {
            id: self.id,
            sender: self.from.name,
            sender_address: self.from.address,
            subject: self.subject,
            preview: self.intro,
            received_at: self.created_at,
            is_read: self.seen,
            has_full_details: false,
        }
    }
}

/// Collection wrapper used by the provider for the message listing.
#[derive(Debug, Deserialize)]
pub struct MessageCollection {
    /// The wrapped message entries, newest-first.
    #[serde(rename = "hydra:member", default)]
    pub members: Vec<MessageWire>,
}

/// A full message on the wire (`GET /messages/{id}`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDetailWire {
    /// The summary fields.
    #[serde(flatten)]
    pub summary: MessageWire,
    /// HTML body fragments, when the message carries HTML.
    #[serde(default)]
    pub html: Vec<String>,
    /// Plain-text body, when present.
    #[serde(default)]
    pub text: Option<String>,
}

impl MessageDetailWire {
    /// Resolve the body: joined HTML fragments, then plain text, then the
    /// no-content sentinel.
    pub fn resolve_body(&self) -> String {
        if !self.html.is_empty() {
            return self.html.join("");
        }
        match self.text.as_deref() {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => NO_CONTENT_SENTINEL.to_string(),
        }
    }

    /// Convert into a fully resolved [`MessageDetail`].
    pub fn into_detail(self) -> MessageDetail {
        let body = self.resolve_body();
        let mut summary = self.summary.into_summary();
        summary.has_full_details = true;
        MessageDetail { summary, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail_wire(html: Vec<&str>, text: Option<&str>) -> MessageDetailWire {
        MessageDetailWire {
            summary: MessageWire {
                id: "m1".into(),
                from: MessageSender {
                    name: "Alice".into(),
                    address: "alice@a.com".into(),
                },
                subject: "Hi".into(),
                intro: "Hi there".into(),
                seen: false,
                created_at: None,
            },
            html: html.into_iter().map(String::from).collect(),
            text: text.map(String::from),
        }
    }

    #[test]
    fn test_body_prefers_joined_html() {
        let wire = detail_wire(vec!["<p>a</p>", "<p>b</p>"], Some("plain"));
        assert_eq!(wire.resolve_body(), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_body_falls_back_to_text() {
        let wire = detail_wire(vec![], Some("plain"));
        assert_eq!(wire.resolve_body(), "plain");
    }

    #[test]
    fn test_body_sentinel_when_empty() {
        let wire = detail_wire(vec![], None);
        assert_eq!(wire.resolve_body(), NO_CONTENT_SENTINEL);

        let wire = detail_wire(vec![], Some(""));
        assert_eq!(wire.resolve_body(), NO_CONTENT_SENTINEL);
    }

    #[test]
    fn test_detail_marks_full_details() {
        let detail = detail_wire(vec![], Some("plain")).into_detail();
        assert!(detail.summary.has_full_details);
        assert_eq!(detail.summary.id, "m1");
        assert_eq!(detail.body, "plain");
    }

    #[test]
    fn test_parse_message_collection() {
        let json = r#"{
            "hydra:member": [
                {
                    "id": "m2",
                    "from": {"name": "Bob", "address": "bob@b.com"},
                    "subject": "Newest",
                    "intro": "preview...",
                    "seen": false,
                    "createdAt": "2026-08-28T10:00:00Z"
                },
                {"id": "m1", "subject": "Older"}
            ]
        }"#;

        let collection: MessageCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.members.len(), 2);
        let summary = collection.members[0].clone().into_summary();
        assert_eq!(summary.id, "m2");
        assert_eq!(summary.sender, "Bob");
        assert!(!summary.has_full_details);
        assert!(summary.received_at.is_some());
    }
}
