//! kelpie: a simple vSphere REST API client
//!
//! This crate issues session-authenticated REST calls against the vSphere
//! Automation API and normalizes the JSON responses for display.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - **models**: Request and response data structures
//! - **transport**: The pluggable blocking HTTP transport and its reqwest implementation
//! - **auth**: Basic credentials and the session header name
//! - **session**: Login and logout against `/api/session`
//! - **executor**: Path validation, request construction and response decoding
//! - **formatter**: JSON pretty-printing and the printable form of a response
//! - **client**: A session and a transport bundled together
//! - **config**: Environment-variable configuration
//! - **cli**: The `kelpie` command-line surface (feature `cli`)
//!
//! # Session lifecycle
//!
//! 1. Build a [`session::Session`] from the server URL and credentials
//! 2. [`session::Session::login`] exchanges the credentials for a token
//! 3. [`executor::call`] performs any number of calls under `/api/`
//! 4. [`session::Session::logout`] invalidates the token
//!
//! # Usage
//!
//! ```no_run
//! use kelpie::client::Client;
//! use kelpie::config::load_from_env;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_from_env()?;
//! let mut client = Client::from_config(&config)?;
//!
//! client.login()?;
//! let response = client.get("/api/vcenter/vm")?;
//! println!("{}", kelpie::formatter::render(&response));
//! client.logout()?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
#[cfg(feature = "cli")]
pub mod cli;
pub mod client;
pub mod config;
pub mod executor;
pub mod formatter;
pub mod models;
pub mod session;
pub mod transport;

pub use client::Client;
pub use executor::{call, ClientError};
pub use models::{HttpMethod, Response};
pub use session::Session;
pub use transport::{Transport, TransportError};
