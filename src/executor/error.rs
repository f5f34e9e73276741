//! Error types for session management and API calls.
//!
//! Every failure is returned to the immediate caller. Nothing here is
//! retried or swallowed.

use crate::transport::TransportError;
use thiserror::Error;

/// Errors returned by login, logout and API calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The transport failed; the underlying error is passed through unchanged.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Login returned a status other than 201 Created.
    #[error("authentication failed")]
    Authentication {
        /// Status code returned by the login request.
        status_code: u16,
    },

    /// The server answered successfully but broke the session protocol.
    #[error("{0}")]
    Protocol(String),

    /// The request was rejected before any network I/O.
    #[error("{0}")]
    Validation(String),

    /// The response body was not valid JSON.
    #[error("failed to decode response body (status {status_code}): {source}")]
    Decode {
        /// Status code of the undecodable response.
        status_code: u16,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },

    /// Logout returned a status other than 204 No Content.
    #[error("logout failed")]
    Logout {
        /// Status code returned by the logout request.
        status_code: u16,
    },
}

impl ClientError {
    /// Returns the HTTP status code associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Authentication { status_code }
            | ClientError::Decode { status_code, .. }
            | ClientError::Logout { status_code } => Some(*status_code),
            _ => None,
        }
    }
}
