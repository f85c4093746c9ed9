//! Content analyzer implementations.

use super::ContentAnalyzer;
use crate::error::TempMailError;
use crate::transport::{HttpRequest, HttpTransport};
use crate::types::AnalysisReport;
use async_trait::async_trait;
use bytes::Bytes;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::sync::Arc;
use url::Url;

#[derive(Serialize)]
struct AnalysisRequestBody {
    prompt: String,
}

/// Analyzer that posts a prompt to a generative-AI endpoint.
pub struct HttpContentAnalyzer {
    endpoint: Url,
    api_key: SecretString,
    transport: Arc<dyn HttpTransport>,
}

impl HttpContentAnalyzer {
    /// Create a new HTTP analyzer.
    pub fn new(endpoint: Url, api_key: SecretString, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            endpoint,
            api_key,
            transport,
        }
    }

    fn build_prompt(subject: &str, body: &str) -> String {
        format!(
            "Assess the following email for phishing and safety. \
             Respond with JSON fields summary, safetyScore (0-100), \
             isPhishing and actionRequired.\n\nSubject: {}\n\n{}",
            subject, body
        )
    }

    async fn try_analyze(&self, subject: &str, body: &str) -> Result<AnalysisReport, TempMailError> {
        let payload = serde_json::to_vec(&AnalysisRequestBody {
            prompt: Self::build_prompt(subject, body),
        })?;

        let request = HttpRequest::post_json(self.endpoint.as_str(), Bytes::from(payload))
            .with_header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            );

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(TempMailError::Response {
                message: format!("Analyzer returned status {}", response.status),
            });
        }

        Ok(serde_json::from_slice(&response.body)?)
    }
}

#[async_trait]
impl ContentAnalyzer for HttpContentAnalyzer {
    async fn analyze(&self, subject: &str, body: &str) -> AnalysisReport {
        match self.try_analyze(subject, body).await {
            Ok(report) => report,
            Err(err) => {
                tracing::warn!(error = %err, "Content analysis failed, using canned report");
                AnalysisReport::unavailable()
            }
        }
    }
}

/// Analyzer used when no credential is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedContentAnalyzer;

#[async_trait]
impl ContentAnalyzer for CannedContentAnalyzer {
    async fn analyze(&self, _subject: &str, _body: &str) -> AnalysisReport {
        AnalysisReport::unavailable()
    }
}
