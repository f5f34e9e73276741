//! Basic HTTP authentication implementation.
//!
//! Encoding and decoding of RFC 7617 Basic credentials, used to exchange a
//! username and password for an API session token.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Encodes username and password into a Basic authentication header value.
///
/// # Examples
///
/// ```
/// use kelpie::auth::basic::basic_auth;
///
/// let auth_header = basic_auth("user", "pass123");
/// assert_eq!(auth_header, "Basic dXNlcjpwYXNzMTIz");
/// ```
pub fn basic_auth(username: &str, password: &str) -> String {
    let credentials = format!("{}:{}", username, password);
    format!("Basic {}", STANDARD.encode(credentials.as_bytes()))
}

/// Parses a Basic authentication header value into username and password.
///
/// Returns `None` if the header is not a Basic header or cannot be decoded.
/// The password may itself contain colons; only the first one separates
/// the two parts.
pub fn parse_basic_auth_header(header: &str) -> Option<(String, String)> {
    let encoded = header.trim().strip_prefix("Basic ")?.trim();

    let decoded_bytes = STANDARD.decode(encoded).ok()?;
    let decoded_str = String::from_utf8(decoded_bytes).ok()?;

    let (username, password) = decoded_str.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}
