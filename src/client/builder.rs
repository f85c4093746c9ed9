//! Builder for creating temp-mail client instances.

use std::sync::Arc;
use std::time::Duration;

use crate::config::TempMailConfig;
use crate::error::TempMailResult;
use crate::resilience::ResilientFetcher;
use crate::services::analysis::{CannedContentAnalyzer, ContentAnalyzer, HttpContentAnalyzer};
use crate::services::{AccountsServiceImpl, DomainsServiceImpl, MessagesServiceImpl};
use crate::transport::{HttpTransport, ReqwestTransport};

use super::client::TempMailClientImpl;

/// Builder for a [`super::TempMailClient`] instance.
///
/// # Example
///
/// ```no_run
/// use integrations_tempmail::client::TempMailClientBuilder;
/// use integrations_tempmail::config::TempMailConfig;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = TempMailConfig::builder().build()?;
/// let client = TempMailClientBuilder::from_config(config).build()?;
/// # Ok(())
/// # }
/// ```
pub struct TempMailClientBuilder {
    config: TempMailConfig,

    // Injectable dependencies for testing
    transport: Option<Arc<dyn HttpTransport>>,
    analyzer: Option<Arc<dyn ContentAnalyzer>>,
}

impl TempMailClientBuilder {
    /// Create a builder from an existing configuration.
    pub fn from_config(config: TempMailConfig) -> Self {
        Self {
            config,
            transport: None,
            analyzer: None,
        }
    }

    /// Override the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Inject a custom transport (used by tests).
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Inject a custom content analyzer.
    pub fn analyzer(mut self, analyzer: Arc<dyn ContentAnalyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    /// Build the client, wiring config, transport, fetcher and services.
    pub fn build(self) -> TempMailResult<TempMailClientImpl> {
        let config = Arc::new(self.config);

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(config.timeout, config.connect_timeout)?),
        };

        let fetcher = Arc::new(ResilientFetcher::new(
            Arc::clone(&transport),
            config.proxy_url.clone(),
        ));

        let analyzer: Arc<dyn ContentAnalyzer> = match self.analyzer {
            Some(analyzer) => analyzer,
            None => match (&config.analyzer_endpoint, &config.analyzer_api_key) {
                (Some(endpoint), Some(key)) => Arc::new(HttpContentAnalyzer::new(
                    endpoint.clone(),
                    key.clone(),
                    Arc::clone(&transport),
                )),
                _ => Arc::new(CannedContentAnalyzer),
            },
        };

        let domains = Arc::new(DomainsServiceImpl::new(
            Arc::clone(&config),
            Arc::clone(&fetcher),
        ));
        let accounts = Arc::new(AccountsServiceImpl::new(
            Arc::clone(&config),
            Arc::clone(&fetcher),
            domains.clone(),
        ));
        let messages = Arc::new(MessagesServiceImpl::new(
            Arc::clone(&config),
            Arc::clone(&fetcher),
        ));

        Ok(TempMailClientImpl {
            domains,
            accounts,
            messages,
            analyzer,
        })
    }
}
