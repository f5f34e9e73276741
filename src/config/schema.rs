//! Configuration schema for the kelpie client.
//!
//! This module defines the settings needed to reach and authenticate
//! against a vCenter server, together with their defaults and validation.

use crate::transport::native::DEFAULT_TIMEOUT;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Settings for one client invocation.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Base URL of the vCenter server, e.g. `https://vcenter.example.com`.
    pub server: String,

    /// Login user, e.g. `administrator@vsphere.local`.
    pub user: String,

    /// Login password. Never serialized.
    #[serde(skip_serializing)]
    pub password: String,

    /// Request timeout in seconds. Defaults to 30.
    ///
    /// Must be greater than 0.
    pub timeout_secs: u64,

    /// Whether to validate TLS certificates.
    ///
    /// vCenter appliances commonly use self-signed certificates, so this
    /// defaults to false.
    pub validate_ssl: bool,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_validate_ssl() -> bool {
    false
}

impl ClientConfig {
    /// Creates a configuration with default timeout and TLS settings.
    pub fn new(
        server: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            server: server.into(),
            user: user.into(),
            password: password.into(),
            timeout_secs: default_timeout_secs(),
            validate_ssl: default_validate_ssl(),
        }
    }

    /// Returns the timeout as a `std::time::Duration`.
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// `Ok(())` if valid, or `Err(String)` describing the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.is_empty() {
            return Err("server must not be empty".to_string());
        }
        if self.user.is_empty() {
            return Err("user must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("server", &self.server)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("validate_ssl", &self.validate_ssl)
            .finish()
    }
}
