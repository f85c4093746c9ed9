//! Account provisioner implementation.
//!
//! Provisioning is strictly sequential: domain resolution, the creation loop,
//! the token exchange, then the account-metadata fetch. Nothing here is
//! cancellable; callers that trigger provisioning concurrently get
//! last-writer-wins semantics on whatever session state they keep.

use super::credentials::{random_password, random_username};
use super::AccountsService;
use crate::config::TempMailConfig;
use crate::error::{TempMailError, TempMailResult};
use crate::resilience::ResilientFetcher;
use crate::services::domains::DomainsService;
use crate::transport::{endpoints, HttpRequest, HttpResponse};
use crate::types::{
    CreateAccountBody, CreateAccountRequest, MeWire, Session, TokenRequestBody, TokenWire,
};
use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use rand::seq::SliceRandom;
use secrecy::SecretString;
use std::sync::Arc;
use tokio::time::sleep;

/// Status the provider returns for an already-registered or invalid address.
const STATUS_UNPROCESSABLE: u16 = 422;

/// Implementation of the AccountsService.
pub struct AccountsServiceImpl {
    config: Arc<TempMailConfig>,
    fetcher: Arc<ResilientFetcher>,
    domains: Arc<dyn DomainsService>,
}

impl AccountsServiceImpl {
    /// Create a new account provisioner.
    pub fn new(
        config: Arc<TempMailConfig>,
        fetcher: Arc<ResilientFetcher>,
        domains: Arc<dyn DomainsService>,
    ) -> Self {
        Self {
            config,
            fetcher,
            domains,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.config.base_url.as_str().trim_end_matches('/'),
            path
        )
    }

    /// Resolve the domain to register under.
    ///
    /// An explicit domain is used verbatim. Otherwise discovery runs up to the
    /// configured number of attempts, pausing between empty results to ride
    /// out transient catalog unavailability, and picks uniformly at random
    /// among the active domains.
    async fn resolve_domain(&self, explicit: Option<&str>) -> TempMailResult<String> {
        if let Some(domain) = explicit {
            return Ok(domain.to_string());
        }

        let attempts = self.config.domain_discovery_attempts;
        for attempt in 1..=attempts {
            let active = self.domains.list_active().await;
            if let Some(pick) = active.choose(&mut rand::thread_rng()) {
                return Ok(pick.domain.clone());
            }

            if attempt < attempts {
                tracing::debug!(attempt, attempts, "Domain catalog empty, retrying");
                sleep(self.config.domain_retry_delay).await;
            }
        }

        Err(TempMailError::NoDomainsAvailable)
    }

    /// Issue one `POST /accounts` request.
    async fn request_creation(
        &self,
        address: &str,
        password: &str,
    ) -> TempMailResult<HttpResponse> {
        let body = serde_json::to_vec(&CreateAccountBody {
            address: address.to_string(),
            password: password.to_string(),
        })?;

        let request =
            HttpRequest::post_json(self.api_url(endpoints::ACCOUNTS), Bytes::from(body));
        Ok(self.fetcher.send(request).await?)
    }

    /// Custom mode: exactly one creation attempt with the given username.
    async fn create_custom(
        &self,
        username: &str,
        domain: &str,
    ) -> TempMailResult<(String, String)> {
        let address = format!("{}@{}", username, domain);
        let password = random_password();

        let response = self.request_creation(&address, &password).await?;
        if response.is_success() {
            return Ok((address, password));
        }

        if response.status == STATUS_UNPROCESSABLE {
            return Err(TempMailError::UsernameUnavailable {
                username: username.to_string(),
            });
        }

        Err(TempMailError::CreationFailed {
            status: response.status,
        })
    }

    /// Random mode: bounded attempts with fresh credentials each time. A 422
    /// is a naming collision and consumes one slot; any other non-2xx status
    /// aborts immediately.
    async fn create_random(&self, domain: &str) -> TempMailResult<(String, String)> {
        let attempts = self.config.account_create_attempts;
        for attempt in 1..=attempts {
            let address = format!("{}@{}", random_username(), domain);
            let password = random_password();

            let response = self.request_creation(&address, &password).await?;
            if response.is_success() {
                return Ok((address, password));
            }

            if response.status == STATUS_UNPROCESSABLE {
                tracing::warn!(attempt, attempts, "Generated address collided, retrying");
                continue;
            }

            return Err(TempMailError::CreationFailed {
                status: response.status,
            });
        }

        Err(TempMailError::CreationExhausted { attempts })
    }

    /// Exchange the address and password for a bearer token.
    async fn exchange_token(&self, address: &str, password: &str) -> TempMailResult<String> {
        let body = serde_json::to_vec(&TokenRequestBody {
            address: address.to_string(),
            password: password.to_string(),
        })?;

        let request = HttpRequest::post_json(self.api_url(endpoints::TOKEN), Bytes::from(body));
        let response = self.fetcher.send(request).await?;
        if !response.is_success() {
            return Err(TempMailError::LoginFailed {
                status: response.status,
            });
        }

        let token: TokenWire = serde_json::from_slice(&response.body)?;
        Ok(token.token)
    }

    /// Fetch the account identifier for the freshly issued token.
    async fn fetch_account_id(&self, token: &str) -> TempMailResult<String> {
        let request = HttpRequest::get(self.api_url(endpoints::ME))
            .with_header("Authorization", format!("Bearer {}", token));

        let response = self.fetcher.send(request).await?;
        if !response.is_success() {
            return Err(TempMailError::LoginFailed {
                status: response.status,
            });
        }

        let me: MeWire = serde_json::from_slice(&response.body)?;
        Ok(me.id)
    }
}

#[async_trait]
impl AccountsService for AccountsServiceImpl {
    async fn create(&self, request: CreateAccountRequest) -> TempMailResult<Session> {
        let domain = self.resolve_domain(request.domain.as_deref()).await?;
        let created_at = Utc::now();

        let (address, password) = match request.username.as_deref() {
            Some(username) => self.create_custom(username, &domain).await?,
            None => self.create_random(&domain).await?,
        };

        let token = self.exchange_token(&address, &password).await?;
        let account_id = self.fetch_account_id(&token).await?;

        let is_premium = request.username.is_some();
        let expires_at = if is_premium {
            None
        } else {
            let ttl = chrono::Duration::from_std(self.config.session_ttl)
                .unwrap_or_else(|_| chrono::Duration::seconds(600));
            Some(created_at + ttl)
        };

        tracing::debug!(address = %address, is_premium, "Account provisioned");

        Ok(Session {
            email_address: address,
            created_at,
            expires_at,
            is_premium,
            token: SecretString::new(token),
            account_id,
            password: SecretString::new(password),
        })
    }
}
