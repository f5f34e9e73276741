//! Blocking HTTP transport backed by reqwest.
//!
//! vCenter appliances usually ship self-signed certificates, so certificate
//! validation is configurable and off by default.

use crate::config::ClientConfig;
use crate::models::{ApiRequest, HttpMethod, RawResponse};
use crate::transport::{Transport, TransportError};
use std::collections::HashMap;
use std::time::Duration;

/// Default request timeout, matching the vSphere client defaults.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport that performs real HTTP round-trips.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Builds a transport with the given timeout and certificate policy.
    pub fn new(timeout: Duration, validate_ssl: bool) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(!validate_ssl)
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;

        Ok(Self { client })
    }

    /// Builds a transport from the loaded client configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        Self::new(config.timeout_duration(), config.validate_ssl)
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        let method = match request.method {
            HttpMethod::GET => reqwest::Method::GET,
            HttpMethod::POST => reqwest::Method::POST,
            HttpMethod::PATCH => reqwest::Method::PATCH,
            HttpMethod::PUT => reqwest::Method::PUT,
            HttpMethod::DELETE => reqwest::Method::DELETE,
        };

        let url = url::Url::parse(&request.url)?;
        let mut req_builder = self.client.request(method, url);

        for (name, value) in &request.headers {
            req_builder = req_builder.header(name, value);
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if !request.body.is_empty() {
            req_builder = req_builder.body(request.body.clone());
        }

        let response = req_builder.send()?;

        let status_code = response.status().as_u16();

        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value_str) = value.to_str() {
                headers.insert(name.as_str().to_string(), value_str.to_string());
            }
        }

        let body = response.bytes()?.to_vec();

        Ok(RawResponse {
            status_code,
            headers,
            body,
        })
    }
}
