//! HTTP response data models.
//!
//! [`RawResponse`] is what a transport hands back; [`Response`] is the
//! normalized value returned by the request executor.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// A response as received from the transport, before decoding.
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    /// HTTP status code (e.g., 200, 404, 500).
    pub status_code: u16,

    /// Response headers. Lookups through [`RawResponse::header`] are
    /// case-insensitive.
    pub headers: HashMap<String, String>,

    /// Complete response body.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Creates a response with the given status and no headers or body.
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Adds a header, builder style.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the body, builder style.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Looks up a header value by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Normalized result of an API call.
///
/// `body` is either the pretty-printed JSON document or the empty string,
/// which means the server sent no body. `json` holds the decoded value
/// whenever `body` is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    /// HTTP status code of the response.
    pub status_code: u16,

    /// Pretty-printed body, or `""` when the response had no body.
    pub body: String,

    /// Decoded JSON document.
    #[serde(skip)]
    pub json: Option<Value>,
}

impl Response {
    /// Creates a response that carried no body.
    pub fn empty(status_code: u16) -> Self {
        Self {
            status_code,
            body: String::new(),
            json: None,
        }
    }

    /// Creates a response from a decoded document and its pretty rendering.
    pub fn with_json(status_code: u16, body: String, json: Value) -> Self {
        Self {
            status_code,
            body,
            json: Some(json),
        }
    }

    /// Decodes the body into a typed value.
    ///
    /// Returns `None` when the response had no body.
    ///
    /// # Examples
    ///
    /// ```
    /// use kelpie::models::Response;
    /// use serde_json::json;
    ///
    /// let response = Response::with_json(200, "[]".to_string(), json!(["vm-1"]));
    /// let ids: Vec<String> = response.json_as().unwrap().unwrap();
    /// assert_eq!(ids, vec!["vm-1"]);
    /// ```
    pub fn json_as<T: DeserializeOwned>(&self) -> Option<Result<T, serde_json::Error>> {
        self.json.clone().map(serde_json::from_value)
    }

    /// Returns `true` if the server sent no body.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Checks if the response status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
