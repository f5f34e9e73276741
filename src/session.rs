//! API session management.
//!
//! A [`Session`] owns the base URL, the credentials and the token issued by
//! the vSphere API. [`Session::login`] is the only operation that sets the
//! token; every API call made through the executor presents it in the
//! `Vmware-Api-Session-Id` header.

use crate::auth::{Credentials, SESSION_HEADER};
use crate::executor::error::ClientError;
use crate::models::{ApiRequest, HttpMethod};
use crate::transport::Transport;
use log::debug;
use std::fmt;

/// Path of the session resource, relative to the base URL.
pub const SESSION_PATH: &str = "/api/session";

/// One authenticated session against a vCenter server.
///
/// A session is created once per invocation. It carries no internal locking;
/// callers that want parallel calls should use one session each.
#[derive(Clone, Default)]
pub struct Session {
    base_url: String,
    credentials: Credentials,
    token: String,
}

impl Session {
    /// Creates a session for `base_url`. No I/O and no URL validation.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            credentials: Credentials::new(username, password),
            token: String::new(),
        }
    }

    /// Sets the base URL, e.g. `https://vcenter.example.com`.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// Sets the credentials used by the next login.
    pub fn set_credentials(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.credentials = Credentials::new(username, password);
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the current token. Empty until a login succeeds.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns `true` once a login has stored a token.
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// Joins the base URL and an absolute API path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Exchanges the credentials for a session token.
    ///
    /// Sends `POST /api/session` with Basic credentials and an empty body.
    /// On 201 Created the `Vmware-Api-Session-Id` response header becomes the
    /// session token.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Transport`] if the round-trip fails
    /// - [`ClientError::Authentication`] on any status other than 201
    /// - [`ClientError::Protocol`] if the session header is missing
    pub fn login<T: Transport + ?Sized>(&mut self, transport: &T) -> Result<(), ClientError> {
        let mut request = ApiRequest::new(HttpMethod::POST, self.endpoint(SESSION_PATH));
        request.set_header("Authorization", self.credentials.authorization_header());

        debug!(
            "logging in to {} as {}",
            self.base_url,
            self.credentials.username()
        );
        let response = transport.send(&request)?;

        if response.status_code != 201 {
            debug!("login rejected with status {}", response.status_code);
            return Err(ClientError::Authentication {
                status_code: response.status_code,
            });
        }

        let token = response
            .header(SESSION_HEADER)
            .ok_or_else(|| ClientError::Protocol("session id not found".to_string()))?;
        self.token = token.to_string();

        debug!("session established");
        Ok(())
    }

    /// Invalidates the session token on the server.
    ///
    /// Sends `DELETE /api/session` with the current token. The token is not
    /// cleared locally; the session is expected to be dropped afterwards.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Transport`] if the round-trip fails
    /// - [`ClientError::Logout`] on any status other than 204
    pub fn logout<T: Transport + ?Sized>(&self, transport: &T) -> Result<(), ClientError> {
        let mut request = ApiRequest::new(HttpMethod::DELETE, self.endpoint(SESSION_PATH));
        request.set_header(SESSION_HEADER, self.token.as_str());

        debug!("logging out of {}", self.base_url);
        let response = transport.send(&request)?;

        if response.status_code != 204 {
            debug!("logout rejected with status {}", response.status_code);
            return Err(ClientError::Logout {
                status_code: response.status_code,
            });
        }

        Ok(())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
