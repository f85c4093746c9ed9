//! HTTP transport layer for the temp-mail client.

mod error;
mod http;
pub mod endpoints;
mod reqwest;

pub use error::TransportError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use self::reqwest::ReqwestTransport;
