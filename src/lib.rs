//! # Temp-Mail API Client
//!
//! Production-ready Rust client for disposable-mailbox providers exposing a
//! mail.tm-compatible REST API.
//!
//! ## Features
//!
//! - Account provisioning: domain discovery with a two-strategy fallback,
//!   collision-retrying account creation, token exchange and metadata fetch
//! - Resilient fetch: direct-then-proxy transport fallback for origins that
//!   block direct requests with 403/429
//! - Message listing, detail resolution (HTML-first body) and deletion with a
//!   soft-failure contract
//! - Optional AI content-safety analysis with a canned no-credential fallback
//! - Secure credential handling with `SecretString`
//! - Mock transport for isolated service tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_tempmail::{
//!     create_client, CreateAccountRequest, TempMailClient, TempMailConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TempMailConfig::builder().build()?;
//!     let client = create_client(config)?;
//!
//!     let session = client.create_account(CreateAccountRequest::random()).await?;
//!     println!("inbox: {}", session.email_address);
//!
//!     let messages = client.list_messages(&session).await;
//!     println!("{} message(s)", messages.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `client` - Main client interface and factory functions
//! - `config` - Configuration types and builder
//! - `auth` - Bearer-token authentication
//! - `transport` - HTTP transport layer and endpoint paths
//! - `resilience` - Direct-then-proxy fallback
//! - `error` - Error taxonomy
//! - `types` - Core types (Domain, Session, messages, analysis)
//! - `services` - Service implementations (domains, accounts, messages, analysis)

#![warn(missing_docs)]
#![warn(clippy::all)]

// Public modules
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod resilience;
pub mod services;
pub mod transport;
pub mod types;

// Development/testing modules - always available for integration tests
pub mod fixtures;
pub mod mocks;

// Re-exports for convenience
pub use auth::{AuthManager, BearerAuthManager, NoAuthManager};
pub use client::{
    create_client, create_client_from_env, TempMailClient, TempMailClientBuilder,
    TempMailClientImpl,
};
pub use config::{
    TempMailConfig, TempMailConfigBuilder, DEFAULT_ACCOUNT_CREATE_ATTEMPTS, DEFAULT_BASE_URL,
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_DOMAIN_DISCOVERY_ATTEMPTS, DEFAULT_DOMAIN_PAGE_SIZE,
    DEFAULT_DOMAIN_RETRY_DELAY_MS, DEFAULT_PROXY_URL, DEFAULT_SESSION_TTL_SECS,
    DEFAULT_TIMEOUT_SECS,
};
pub use error::{TempMailError, TempMailResult};
pub use resilience::ResilientFetcher;
pub use transport::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError,
};

// Type re-exports
pub use types::{
    AnalysisReport, CreateAccountRequest, Domain, MessageDetail, MessageSummary, Session,
};

// Service re-exports
pub use services::{
    AccountsService, AccountsServiceImpl, CannedContentAnalyzer, ContentAnalyzer, DomainsService,
    DomainsServiceImpl, HttpContentAnalyzer, MessagesService, MessagesServiceImpl,
};
