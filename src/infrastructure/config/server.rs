//! HTTP listener configuration.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind. `PORT` in the environment overrides this value.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".into()
}

const fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Socket address to bind.
    ///
    /// # Errors
    /// Returns an error if `host` is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|_| ConfigError::InvalidValue {
            field: "server.host",
            reason: format!("not an IP address: {:?}", self.host),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
