//! Content-safety analysis of message bodies.

mod service;

use crate::types::AnalysisReport;
use async_trait::async_trait;

pub use service::{CannedContentAnalyzer, HttpContentAnalyzer};

/// Analyzer for message content.
///
/// Injected explicitly into whatever needs it; there is no hidden global
/// client. The no-credential variant ([`CannedContentAnalyzer`]) returns a
/// deterministic fallback report.
#[async_trait]
pub trait ContentAnalyzer: Send + Sync {
    /// Analyze a message, returning a safety report. Never errors: a failed
    /// analysis degrades to the canned report.
    async fn analyze(&self, subject: &str, body: &str) -> AnalysisReport;
}
