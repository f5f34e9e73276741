//! Transport error types.
//!
//! This module defines errors that can occur while a request is on the
//! wire: connection failures, timeouts and TLS problems. They are surfaced
//! to callers unchanged.

use thiserror::Error;

/// Errors that can occur while sending a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Network error occurred during request execution.
    ///
    /// This includes connection failures, DNS resolution errors,
    /// and other network-level issues.
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out before completion.
    #[error("Request timed out")]
    Timeout,

    /// The target URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// TLS/SSL error occurred during HTTPS connection.
    #[error("TLS/SSL error: {0}")]
    Tls(String),

    /// The underlying client could not build the request.
    #[error("Request build error: {0}")]
    Build(String),
}

/// Convert reqwest errors to TransportError.
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_builder() {
            if err.url().is_none() {
                TransportError::InvalidUrl(message)
            } else {
                TransportError::Build(message)
            }
        } else if message.contains("certificate") || message.contains("TLS") || message.contains("SSL")
        {
            TransportError::Tls(message)
        } else {
            TransportError::Network(message)
        }
    }
}

/// Convert URL parsing errors to TransportError.
impl From<url::ParseError> for TransportError {
    fn from(err: url::ParseError) -> Self {
        TransportError::InvalidUrl(err.to_string())
    }
}
