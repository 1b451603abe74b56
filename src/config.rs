// src/config.rs
use std::net::{Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_ENVIRONMENT: &str = "development";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ML_SERVICE_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
}

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("ML_SERVICE_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let environment =
            lookup("NODE_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        Ok(Self { port, environment })
    }

    pub fn debug(&self) -> bool {
        self.environment == DEFAULT_ENVIRONMENT
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    pub fn default_log_filter(&self) -> &'static str {
        if self.debug() { "debug" } else { "info" }
    }
}
