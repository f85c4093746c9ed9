//! Configuration types for the temp-mail client.

use crate::error::TempMailError;
use secrecy::SecretString;
use std::time::Duration;
use url::Url;

/// Default mail-provider API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.mail.tm";

/// Default CORS-relay endpoint used by the proxy fallback.
pub const DEFAULT_PROXY_URL: &str = "https://api.allorigins.win/raw";

/// Default request timeout (30 seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout (10 seconds).
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default page size requested from the domain catalog.
pub const DEFAULT_DOMAIN_PAGE_SIZE: u32 = 100;

/// Default number of domain-discovery attempts during provisioning.
pub const DEFAULT_DOMAIN_DISCOVERY_ATTEMPTS: u32 = 3;

/// Default delay between empty domain-discovery results (500ms).
pub const DEFAULT_DOMAIN_RETRY_DELAY_MS: u64 = 500;

/// Default number of account-creation attempts in random mode.
pub const DEFAULT_ACCOUNT_CREATE_ATTEMPTS: u32 = 5;

/// Default lifetime of a randomly provisioned session (10 minutes).
pub const DEFAULT_SESSION_TTL_SECS: u64 = 600;

/// Configuration for the temp-mail client.
#[derive(Clone)]
pub struct TempMailConfig {
    /// Base URL for the mail provider API.
    pub base_url: Url,
    /// CORS-relay endpoint for the proxy fallback.
    pub proxy_url: Url,
    /// Default timeout for requests.
    pub timeout: Duration,
    /// Connect timeout.
    pub connect_timeout: Duration,
    /// Page size used by the paginated domain-catalog query.
    pub domain_page_size: u32,
    /// Number of times provisioning retries an empty domain catalog.
    pub domain_discovery_attempts: u32,
    /// Delay between empty domain-discovery results.
    pub domain_retry_delay: Duration,
    /// Account-creation attempts in random-username mode.
    pub account_create_attempts: u32,
    /// Lifetime of a randomly provisioned session.
    pub session_ttl: Duration,
    /// Optional endpoint for the content-safety analyzer.
    pub analyzer_endpoint: Option<Url>,
    /// Optional API key for the content-safety analyzer.
    pub analyzer_api_key: Option<SecretString>,
}

impl TempMailConfig {
    /// Create a new configuration builder.
    pub fn builder() -> TempMailConfigBuilder {
        TempMailConfigBuilder::default()
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `TEMPMAIL_BASE_URL`, `TEMPMAIL_PROXY_URL`, `TEMPMAIL_TIMEOUT_SECS`
    /// and `TEMPMAIL_ANALYZER_API_KEY`; everything falls back to defaults.
    pub fn from_env() -> Result<Self, TempMailError> {
        let base_url =
            std::env::var("TEMPMAIL_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let proxy_url =
            std::env::var("TEMPMAIL_PROXY_URL").unwrap_or_else(|_| DEFAULT_PROXY_URL.to_string());

        let timeout_secs: u64 = std::env::var("TEMPMAIL_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let mut builder = Self::builder()
            .base_url(&base_url)?
            .proxy_url(&proxy_url)?
            .timeout(Duration::from_secs(timeout_secs));

        if let Ok(key) = std::env::var("TEMPMAIL_ANALYZER_API_KEY") {
            builder = builder.analyzer_api_key(SecretString::new(key));
        }

        builder.build()
    }
}

/// Builder for TempMailConfig.
#[derive(Default)]
pub struct TempMailConfigBuilder {
    base_url: Option<Url>,
    proxy_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    domain_page_size: Option<u32>,
    domain_discovery_attempts: Option<u32>,
    domain_retry_delay: Option<Duration>,
    account_create_attempts: Option<u32>,
    session_ttl: Option<Duration>,
    analyzer_endpoint: Option<Url>,
    analyzer_api_key: Option<SecretString>,
}

impl TempMailConfigBuilder {
    /// Set the provider base URL.
    pub fn base_url(mut self, base_url: &str) -> Result<Self, TempMailError> {
        self.base_url = Some(Url::parse(base_url)?);
        Ok(self)
    }

    /// Set the CORS-relay endpoint.
    pub fn proxy_url(mut self, proxy_url: &str) -> Result<Self, TempMailError> {
        self.proxy_url = Some(Url::parse(proxy_url)?);
        Ok(self)
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the page size for the paginated domain-catalog query.
    pub fn domain_page_size(mut self, size: u32) -> Self {
        self.domain_page_size = Some(size);
        self
    }

    /// Set the number of domain-discovery attempts during provisioning.
    pub fn domain_discovery_attempts(mut self, attempts: u32) -> Self {
        self.domain_discovery_attempts = Some(attempts);
        self
    }

    /// Set the delay between empty domain-discovery results.
    pub fn domain_retry_delay(mut self, delay: Duration) -> Self {
        self.domain_retry_delay = Some(delay);
        self
    }

    /// Set the account-creation attempt budget for random-username mode.
    pub fn account_create_attempts(mut self, attempts: u32) -> Self {
        self.account_create_attempts = Some(attempts);
        self
    }

    /// Set the lifetime of randomly provisioned sessions.
    pub fn session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = Some(ttl);
        self
    }

    /// Set the content-safety analyzer endpoint.
    pub fn analyzer_endpoint(mut self, endpoint: &str) -> Result<Self, TempMailError> {
        self.analyzer_endpoint = Some(Url::parse(endpoint)?);
        Ok(self)
    }

    /// Set the content-safety analyzer API key.
    pub fn analyzer_api_key(mut self, key: SecretString) -> Self {
        self.analyzer_api_key = Some(key);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<TempMailConfig, TempMailError> {
        let domain_discovery_attempts = self
            .domain_discovery_attempts
            .unwrap_or(DEFAULT_DOMAIN_DISCOVERY_ATTEMPTS);
        let account_create_attempts = self
            .account_create_attempts
            .unwrap_or(DEFAULT_ACCOUNT_CREATE_ATTEMPTS);

        if domain_discovery_attempts == 0 {
            return Err(TempMailError::Configuration {
                message: "domain_discovery_attempts must be at least 1".to_string(),
            });
        }
        if account_create_attempts == 0 {
            return Err(TempMailError::Configuration {
                message: "account_create_attempts must be at least 1".to_string(),
            });
        }

        // Defaults are compile-time constants and always parse.
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        let proxy_url = match self.proxy_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_PROXY_URL)?,
        };

        Ok(TempMailConfig {
            base_url,
            proxy_url,
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            connect_timeout: self
                .connect_timeout
                .unwrap_or(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)),
            domain_page_size: self.domain_page_size.unwrap_or(DEFAULT_DOMAIN_PAGE_SIZE),
            domain_discovery_attempts,
            domain_retry_delay: self
                .domain_retry_delay
                .unwrap_or(Duration::from_millis(DEFAULT_DOMAIN_RETRY_DELAY_MS)),
            account_create_attempts,
            session_ttl: self
                .session_ttl
                .unwrap_or(Duration::from_secs(DEFAULT_SESSION_TTL_SECS)),
            analyzer_endpoint: self.analyzer_endpoint,
            analyzer_api_key: self.analyzer_api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TempMailConfig::builder().build().unwrap();

        assert_eq!(config.base_url.as_str(), "https://api.mail.tm/");
        assert_eq!(config.proxy_url.as_str(), "https://api.allorigins.win/raw");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.domain_page_size, 100);
        assert_eq!(config.domain_discovery_attempts, 3);
        assert_eq!(config.domain_retry_delay, Duration::from_millis(500));
        assert_eq!(config.account_create_attempts, 5);
        assert_eq!(config.session_ttl, Duration::from_secs(600));
        assert!(config.analyzer_api_key.is_none());
    }

    #[test]
    fn test_custom_config() {
        let config = TempMailConfig::builder()
            .base_url("https://mail.example.com")
            .unwrap()
            .timeout(Duration::from_secs(5))
            .domain_retry_delay(Duration::from_millis(10))
            .session_ttl(Duration::from_secs(60))
            .build()
            .unwrap();

        assert_eq!(config.base_url.as_str(), "https://mail.example.com/");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.domain_retry_delay, Duration::from_millis(10));
        assert_eq!(config.session_ttl, Duration::from_secs(60));
    }

    #[test]
    fn test_invalid_base_url() {
        let result = TempMailConfig::builder().base_url("not a url");
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let result = TempMailConfig::builder()
            .account_create_attempts(0)
            .build();
        assert!(matches!(
            result,
            Err(TempMailError::Configuration { .. })
        ));

        let result = TempMailConfig::builder()
            .domain_discovery_attempts(0)
            .build();
        assert!(result.is_err());
    }
}
