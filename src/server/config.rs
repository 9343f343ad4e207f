//! Environment-based server configuration.

use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

/// Address the HTTP listener binds to when `BIND_ADDRESS` is unset.
pub const DEFAULT_BIND_ADDRESS: ([u8; 4], u16) = ([0, 0, 0, 0], 3000);

/// Runtime configuration read from the environment.
pub struct Config {
    /// SeaORM connection string (`DATABASE_URL`)
    pub database_url: String,
    /// Listener address (`BIND_ADDRESS`)
    pub bind_address: SocketAddr,
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns the value of a variable if set.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = match lookup("BIND_ADDRESS") {
            Some(address) => address
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "BIND_ADDRESS".to_string(),
                    reason: e.to_string(),
                })?,
            None => SocketAddr::from(DEFAULT_BIND_ADDRESS),
        };

        Ok(Self {
            database_url,
            bind_address,
        })
    }
}
