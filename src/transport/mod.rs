//! Pluggable HTTP transport.
//!
//! The session manager and the request executor never talk to the network
//! directly. They hand an [`ApiRequest`] to a [`Transport`] and get a
//! [`RawResponse`] back. TLS settings, timeouts and connection reuse are the
//! transport's business.

pub mod error;
pub mod native;

#[cfg(test)]
pub(crate) mod mock;

pub use error::TransportError;
pub use native::HttpTransport;

use crate::models::{ApiRequest, RawResponse};

/// A blocking request/response round-trip.
pub trait Transport {
    /// Sends `request` and returns the complete response.
    fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        (**self).send(request)
    }
}
