//! API request executor.
//!
//! Validates the target path, builds a request carrying the session token,
//! sends it through the injected [`Transport`] and normalizes the response
//! into a [`Response`].
//!
//! Each call is independent. The only state shared between calls is the
//! token held by the [`Session`].

pub mod error;

pub use error::ClientError;

use crate::auth::SESSION_HEADER;
use crate::formatter::json::{decode_body, format_json_pretty};
use crate::models::{ApiRequest, HttpMethod, RawResponse, Response};
use crate::session::Session;
use crate::transport::Transport;
use log::debug;
use std::collections::HashMap;

/// Namespace every API path must live under.
pub const API_PREFIX: &str = "/api/";

/// Path prefixes accepted by [`validate_path`].
pub const ALLOWED_PREFIXES: &[&str] = &[API_PREFIX];

/// Checks that `path` lies within the API namespace.
pub fn validate_path(path: &str) -> Result<(), ClientError> {
    validate_path_with(path, ALLOWED_PREFIXES)
}

/// Checks that `path` starts with one of `prefixes`.
pub fn validate_path_with(path: &str, prefixes: &[&str]) -> Result<(), ClientError> {
    if prefixes.iter().any(|prefix| path.starts_with(prefix)) {
        return Ok(());
    }

    let expected = prefixes
        .iter()
        .map(|prefix| format!("\"{}\"", prefix))
        .collect::<Vec<_>>()
        .join(" or ");
    Err(ClientError::Validation(format!(
        "request path must start with {}",
        expected
    )))
}

/// Builds the request for an API call.
///
/// Always sets `Content-Type: application/json` and the session header, even
/// when the token is still empty; rejecting it is the server's job.
pub fn build_request(
    session: &Session,
    method: HttpMethod,
    path: &str,
    query: &HashMap<String, String>,
    body: &[u8],
) -> ApiRequest {
    let mut request = ApiRequest::new(method, session.endpoint(path));
    request.set_header("Content-Type", "application/json");
    request.set_header(SESSION_HEADER, session.token());

    for (key, value) in query {
        request.add_query(key.as_str(), value.as_str());
    }
    request.body = body.to_vec();

    request
}

/// Converts a raw response into a [`Response`].
///
/// An empty body yields the empty-string sentinel. Any other body must be
/// valid JSON and is re-indented.
pub fn decode_response(raw: RawResponse) -> Result<Response, ClientError> {
    let status_code = raw.status_code;
    let decode_err = |source: serde_json::Error| ClientError::Decode {
        status_code,
        source,
    };

    match decode_body(&raw.body).map_err(decode_err)? {
        None => Ok(Response::empty(status_code)),
        Some(value) => {
            let body = format_json_pretty(&value).map_err(decode_err)?;
            Ok(Response::with_json(status_code, body, value))
        }
    }
}

/// Performs one API call.
///
/// # Errors
///
/// - [`ClientError::Validation`] if `path` is outside the API namespace; no
///   request is sent in that case
/// - [`ClientError::Transport`] if the round-trip fails
/// - [`ClientError::Decode`] if the response body is not valid JSON
///
/// # Examples
///
/// ```no_run
/// use kelpie::executor::call;
/// use kelpie::models::HttpMethod;
/// use kelpie::session::Session;
/// use kelpie::transport::HttpTransport;
/// use std::collections::HashMap;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = HttpTransport::new(Duration::from_secs(30), false)?;
/// let mut session = Session::new("https://vcenter.example.com", "user", "pass");
/// session.login(&transport)?;
///
/// let response = call(&session, &transport, HttpMethod::GET, "/api/vcenter/vm", &HashMap::new(), &[])?;
/// println!("{}", response.body);
///
/// session.logout(&transport)?;
/// # Ok(())
/// # }
/// ```
pub fn call<T: Transport + ?Sized>(
    session: &Session,
    transport: &T,
    method: HttpMethod,
    path: &str,
    query: &HashMap<String, String>,
    body: &[u8],
) -> Result<Response, ClientError> {
    validate_path(path)?;

    let request = build_request(session, method, path, query, body);
    debug!("{} {}", request.method, request.full_url());

    let raw = transport.send(&request)?;
    debug!(
        "{} {} -> {} ({} bytes)",
        request.method,
        request.url,
        raw.status_code,
        raw.body.len()
    );

    decode_response(raw)
}
