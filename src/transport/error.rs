//! Transport layer error types.

/// Transport error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    /// Failed to establish a connection or the connection dropped mid-flight.
    #[error("Connection error: {0}")]
    Connection(String),
    /// The request exceeded the configured timeout.
    #[error("Timeout")]
    Timeout,
    /// The request could not be built or the response body could not be read.
    #[error("Request error: {0}")]
    Request(String),
}
