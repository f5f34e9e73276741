//! Session-bound API client.
//!
//! [`Client`] pairs one [`Session`] with one transport so that callers can
//! log in, make calls and log out without threading both values around.

use crate::config::ClientConfig;
use crate::executor::{self, ClientError};
use crate::models::{HttpMethod, Response};
use crate::session::Session;
use crate::transport::{HttpTransport, Transport, TransportError};
use std::collections::HashMap;

/// A vSphere API client owning its session and transport.
#[derive(Debug)]
pub struct Client<T> {
    session: Session,
    transport: T,
}

impl Client<HttpTransport> {
    /// Creates a client backed by the real HTTP transport.
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        let transport = HttpTransport::from_config(config)?;
        let session = Session::new(
            config.server.clone(),
            config.user.clone(),
            config.password.clone(),
        );
        Ok(Self::new(session, transport))
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client from an existing session and transport.
    pub fn new(session: Session, transport: T) -> Self {
        Self { session, transport }
    }

    /// Returns the underlying session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Logs in and stores the session token. See [`Session::login`].
    pub fn login(&mut self) -> Result<(), ClientError> {
        self.session.login(&self.transport)
    }

    /// Logs out. See [`Session::logout`].
    pub fn logout(&self) -> Result<(), ClientError> {
        self.session.logout(&self.transport)
    }

    /// Performs one API call. See [`executor::call`].
    pub fn call(
        &self,
        method: HttpMethod,
        path: &str,
        query: &HashMap<String, String>,
        body: &[u8],
    ) -> Result<Response, ClientError> {
        executor::call(&self.session, &self.transport, method, path, query, body)
    }

    /// Shorthand for a GET without query parameters.
    pub fn get(&self, path: &str) -> Result<Response, ClientError> {
        self.call(HttpMethod::GET, path, &HashMap::new(), &[])
    }
}
