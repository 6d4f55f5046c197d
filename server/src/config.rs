//! Server configuration from environment variables.

use std::env;
use std::net::SocketAddr;
use thiserror::Error;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Load configuration.
    ///
    /// Optional:
    /// - `PANTRY_BIND_ADDR`: listen address (default: "0.0.0.0:3000")
    ///
    /// Provider settings are read separately by
    /// `pantry_core::create_provider_from_env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var("PANTRY_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        Self::parse(&raw)
    }

    fn parse(bind_addr: &str) -> Result<Self, ConfigError> {
        let bind_addr = bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                name: "PANTRY_BIND_ADDR",
                value: bind_addr.to_string(),
            })?;
        Ok(Self { bind_addr })
    }
}
