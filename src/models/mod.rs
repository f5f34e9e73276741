//! Data models for API requests and responses.
//!
//! This module contains the core data structures passed between the session
//! manager, the request executor and the transport.

pub mod request;
pub mod response;

pub use request::{ApiRequest, HttpMethod};
pub use response::{RawResponse, Response};
