//! Content-safety analysis types.

use serde::{Deserialize, Serialize};

/// Result of analyzing a message body for safety.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// One-paragraph summary of the message.
    pub summary: String,
    /// Safety score from 0 (dangerous) to 100 (safe).
    pub safety_score: u8,
    /// Whether the message looks like a phishing attempt.
    pub is_phishing: bool,
    /// Suggested action for the recipient.
    pub action_required: String,
}

impl AnalysisReport {
    /// Canned report used when no analyzer credential is configured or the
    /// analysis call fails.
    pub fn unavailable() -> Self {
        Self {
            summary: "Automatic analysis is unavailable.".to_string(),
            safety_score: 50,
            is_phishing: false,
            action_required: "Review the message manually before acting on it.".to_string(),
        }
    }
}
