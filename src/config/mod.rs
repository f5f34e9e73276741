//! Configuration loading.
//!
//! Settings come from environment variables. The server URL, user and
//! password are required; timeout and certificate validation are optional.

pub mod schema;

pub use schema::ClientConfig;

use thiserror::Error;

/// Base URL of the vCenter server.
pub const ENV_SERVER: &str = "KELPIE_VCENTER_SERVER";
/// Login user.
pub const ENV_USER: &str = "KELPIE_VCENTER_USER";
/// Login password.
pub const ENV_PASSWORD: &str = "KELPIE_VCENTER_PASSWORD";
/// Request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "KELPIE_TIMEOUT_SECS";
/// Whether to validate TLS certificates.
pub const ENV_VALIDATE_SSL: &str = "KELPIE_VALIDATE_SSL";

/// Errors that can occur while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("Environment variable '{0}' is not set.")]
    MissingVariable(&'static str),

    /// An optional variable holds a value that cannot be parsed.
    #[error("Environment variable '{name}' has an invalid value '{value}': {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// The assembled configuration failed validation.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Loads configuration from the process environment.
///
/// # Example
///
/// ```no_run
/// use kelpie::config::load_from_env;
///
/// let config = load_from_env().unwrap();
/// println!("Server: {}", config.server);
/// ```
pub fn load_from_env() -> Result<ClientConfig, ConfigError> {
    load_from(|name| std::env::var(name).ok())
}

/// Loads configuration through an arbitrary variable lookup.
///
/// Required variables are checked in order: server, user, password. An
/// empty value counts as unset.
pub fn load_from<F>(lookup: F) -> Result<ClientConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |name: &'static str| {
        lookup(name)
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingVariable(name))
    };

    let server = required(ENV_SERVER)?;
    let user = required(ENV_USER)?;
    let password = required(ENV_PASSWORD)?;

    let mut config = ClientConfig::new(server, user, password);

    if let Some(value) = lookup(ENV_TIMEOUT_SECS).filter(|v| !v.is_empty()) {
        config.timeout_secs = value
            .trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                name: ENV_TIMEOUT_SECS,
                value: value.clone(),
                reason: e.to_string(),
            })?;
    }

    if let Some(value) = lookup(ENV_VALIDATE_SSL).filter(|v| !v.is_empty()) {
        config.validate_ssl = parse_bool(&value).ok_or_else(|| ConfigError::InvalidValue {
            name: ENV_VALIDATE_SSL,
            value: value.clone(),
            reason: "expected true or false".to_string(),
        })?;
    }

    config.validate().map_err(ConfigError::Invalid)?;

    Ok(config)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
