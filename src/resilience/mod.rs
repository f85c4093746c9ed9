//! Direct-then-proxy fallback for requests the origin blocks.
//!
//! Browser-facing mail providers intermittently reject direct requests with
//! 403 (forbidden) or 429 (rate-limited). The fetcher issues one direct
//! attempt and, on a transport error or one of those statuses, re-issues the
//! same request once through a CORS-relay endpoint with the original target
//! percent-encoded into the query string. The proxied outcome is returned
//! as-is; there is no further retry at this layer.

use crate::transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use url::form_urlencoded;
use url::Url;

/// HTTP statuses that trigger the proxy fallback.
const FALLBACK_STATUSES: [u16; 2] = [403, 429];

/// Fetcher with a single-shot proxy fallback.
pub struct ResilientFetcher {
    transport: Arc<dyn HttpTransport>,
    proxy_url: Url,
}

impl ResilientFetcher {
    /// Create a fetcher over the given transport and CORS-relay endpoint.
    pub fn new(transport: Arc<dyn HttpTransport>, proxy_url: Url) -> Self {
        Self {
            transport,
            proxy_url,
        }
    }

    /// Whether a direct-attempt status requires the proxy fallback.
    fn needs_fallback(status: u16) -> bool {
        FALLBACK_STATUSES.contains(&status)
    }

    /// Build the proxied variant of a request: same method, headers and body,
    /// targeting the relay with the original URL percent-encoded and a
    /// cache-busting timestamp parameter appended.
    fn proxied(&self, request: &HttpRequest) -> HttpRequest {
        let encoded: String = form_urlencoded::byte_serialize(request.url.as_bytes()).collect();
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();

        let separator = if self.proxy_url.query().is_some() { '&' } else { '?' };
        let url = format!(
            "{}{}url={}&_={}",
            self.proxy_url, separator, encoded, millis
        );

        HttpRequest {
            method: request.method,
            url,
            headers: request.headers.clone(),
            body: request.body.clone(),
        }
    }

    /// Send a request, falling back to the proxy on a transport error or a
    /// 403/429 direct response. Fails only when both attempts fail.
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let proxied = self.proxied(&request);

        match self.transport.send(request).await {
            Ok(response) if !Self::needs_fallback(response.status) => Ok(response),
            Ok(response) => {
                tracing::warn!(
                    status = response.status,
                    "Direct request blocked, retrying through proxy"
                );
                self.transport.send(proxied).await
            }
            Err(err) => {
                tracing::warn!(error = %err, "Direct request failed, retrying through proxy");
                self.transport.send(proxied).await
            }
        }
    }
}
