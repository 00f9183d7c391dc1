//! Environment-driven server configuration.

use std::env;
use std::net::SocketAddr;

const BIND_ADDR_VAR: &str = "TODOS_BIND_ADDR";
const DATABASE_URL_VAR: &str = "TODOS_DATABASE_URL";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DATABASE_URL: &str = "todos.db";

/// Configuration failures raised during startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The bind address could not be parsed.
    #[error("invalid bind address {value:?}: {message}")]
    InvalidBindAddr { value: String, message: String },
}

/// Startup configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address the server binds to.
    pub bind_addr: SocketAddr,
    /// SQLite database path.
    pub database_url: String,
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to defaults.
    ///
    /// `TODOS_BIND_ADDR` defaults to `0.0.0.0:8080`; `TODOS_DATABASE_URL`
    /// defaults to `todos.db` in the working directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_addr =
            env::var(BIND_ADDR_VAR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = raw_addr
            .parse()
            .map_err(|error: std::net::AddrParseError| ConfigError::InvalidBindAddr {
                value: raw_addr,
                message: error.to_string(),
            })?;
        let database_url =
            env::var(DATABASE_URL_VAR).unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());
        Ok(Self {
            bind_addr,
            database_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bind_addr_parses() {
        let addr: SocketAddr = DEFAULT_BIND_ADDR.parse().expect("default addr is valid");
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn invalid_bind_addr_is_reported() {
        let err = "not-an-addr"
            .parse::<SocketAddr>()
            .map_err(|error| ConfigError::InvalidBindAddr {
                value: "not-an-addr".to_owned(),
                message: error.to_string(),
            })
            .unwrap_err();
        assert!(err.to_string().contains("not-an-addr"));
    }
}
