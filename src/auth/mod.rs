//! Authentication primitives.
//!
//! The vSphere API authenticates a login with HTTP Basic credentials and
//! every later call with the session token issued by that login.

pub mod basic;

use serde::Serialize;
use std::fmt;

/// Header carrying the API session token on requests and on the login response.
pub const SESSION_HEADER: &str = "Vmware-Api-Session-Id";

/// A username/password pair.
///
/// The password is write-only: it is never displayed, logged or serialized.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    username: String,
    #[serde(skip_serializing)]
    password: String,
}

impl Credentials {
    /// Creates a credential pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the `Authorization` header value for these credentials.
    pub fn authorization_header(&self) -> String {
        basic::basic_auth(&self.username, &self.password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
