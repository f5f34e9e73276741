//! HTTP request data models.
//!
//! This module defines the method set accepted by the vSphere REST API and
//! the transport-level request that is handed to a [`Transport`].
//!
//! [`Transport`]: crate::transport::Transport

/// HTTP request method.
///
/// Only the methods the vSphere Automation API exposes are modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Retrieve a resource
    GET,
    /// Create a resource or invoke an action
    POST,
    /// Partially modify a resource
    PATCH,
    /// Replace a resource
    PUT,
    /// Remove a resource
    DELETE,
}

impl HttpMethod {
    /// Returns the string representation of the HTTP method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully-qualified request ready to be sent by a transport.
///
/// Built fresh for every round-trip and never retained afterwards. Query
/// parameters are kept separate from the URL so that transports can encode
/// them with their own machinery.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: HttpMethod,

    /// Absolute target URL without the query string.
    pub url: String,

    /// Request headers in insertion order.
    pub headers: Vec<(String, String)>,

    /// Query parameters. Duplicated keys are sent as given.
    pub query: Vec<(String, String)>,

    /// Raw request body. Empty means no body.
    pub body: Vec<u8>,
}

impl ApiRequest {
    /// Creates a request with no headers, query parameters or body.
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Sets a header, replacing any existing header with the same name.
    ///
    /// Header names are compared case-insensitively.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
    }

    /// Appends a query parameter without deduplicating.
    pub fn add_query(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), value.into()));
    }

    /// Looks up a header value by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns the URL with the form-encoded query string appended.
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish();
        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.url, separator, query)
    }
}

// Headers may carry credentials, so only their names are shown.
impl std::fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header_names: Vec<&str> = self.headers.iter().map(|(k, _)| k.as_str()).collect();
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &header_names)
            .field("query", &self.query)
            .field("body_len", &self.body.len())
            .finish()
    }
}
