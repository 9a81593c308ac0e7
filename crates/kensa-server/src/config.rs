//! Server configuration from the environment
//!
//! `.env` is loaded first (if present), then:
//! - `KENSA_HOST` (default `127.0.0.1`)
//! - `KENSA_PORT` (default `5001`)
//! - `KENSA_DEFAULT_MODEL` (default `general`)

use anyhow::{Context, Result};
use std::net::SocketAddr;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5001;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Target model when a request names none
    pub default_model: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            default_model: kensa::DEFAULT_TARGET_MODEL.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("KENSA_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("KENSA_PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("Invalid KENSA_PORT: {}", port))?;
        }
        if let Some(model) = lookup("KENSA_DEFAULT_MODEL") {
            config.default_model = model;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}
