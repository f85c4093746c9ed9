//! Domain discovery implementation.

use super::DomainsService;
use crate::config::TempMailConfig;
use crate::error::TempMailError;
use crate::resilience::ResilientFetcher;
use crate::transport::{endpoints, HttpRequest};
use crate::types::{Domain, DomainCollection};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Implementation of the DomainsService.
///
/// The provider's catalog is sometimes slow to list all domains under
/// pagination parameters, so discovery runs two strategies: an explicit
/// large-page query first, then the default (unpaginated) query if the first
/// yields no active domains.
pub struct DomainsServiceImpl {
    config: Arc<TempMailConfig>,
    fetcher: Arc<ResilientFetcher>,
}

impl DomainsServiceImpl {
    /// Create a new domains service implementation.
    pub fn new(config: Arc<TempMailConfig>, fetcher: Arc<ResilientFetcher>) -> Self {
        Self { config, fetcher }
    }

    fn catalog_root(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.as_str().trim_end_matches('/'),
            endpoints::DOMAINS
        )
    }

    /// Strategy A: explicit large page size, with a timestamp parameter to
    /// defeat HTTP caching.
    fn paginated_url(&self) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        format!(
            "{}?page=1&itemsPerPage={}&_={}",
            self.catalog_root(),
            self.config.domain_page_size,
            millis
        )
    }

    /// Strategy B: the provider's default query.
    fn default_url(&self) -> String {
        self.catalog_root()
    }

    /// Fetch one catalog URL and filter to active domains.
    async fn fetch_active(&self, url: String) -> Result<Vec<Domain>, TempMailError> {
        let response = self.fetcher.send(HttpRequest::get(url)).await?;
        if !response.is_success() {
            return Err(TempMailError::Response {
                message: format!("Domain catalog returned status {}", response.status),
            });
        }

        let collection: DomainCollection = serde_json::from_slice(&response.body)?;
        Ok(collection
            .members
            .into_iter()
            .filter(|d| d.is_active)
            .collect())
    }
}

#[async_trait]
impl DomainsService for DomainsServiceImpl {
    async fn list_active(&self) -> Vec<Domain> {
        match self.fetch_active(self.paginated_url()).await {
            Ok(domains) if !domains.is_empty() => return domains,
            Ok(_) => {
                tracing::debug!("Paginated domain catalog had no active domains, trying default query");
            }
            Err(err) => {
                tracing::warn!(error = %err, "Paginated domain catalog query failed, trying default query");
            }
        }

        match self.fetch_active(self.default_url()).await {
            Ok(domains) => domains,
            Err(err) => {
                tracing::warn!(error = %err, "Default domain catalog query failed");
                Vec::new()
            }
        }
    }
}
