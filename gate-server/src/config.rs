//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable holding the listen address.
pub const ADDR_ENV: &str = "GATE_SERVER_ADDR";

/// Environment variable holding the gate data file path.
pub const GATES_PATH_ENV: &str = "GATES_PATH";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The listen address could not be parsed
    #[error("invalid GATE_SERVER_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Configuration for the gate server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// JSON file holding the gate records.
    pub gates_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            gates_path: PathBuf::from("gates.json"),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment, falling back to
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_ENV) {
            let addr = value
                .parse()
                .map_err(|source| ConfigError::InvalidAddr { value, source })?;
            config = config.with_bind_addr(addr);
        }

        if let Some(path) = lookup(GATES_PATH_ENV) {
            config = config.with_gates_path(path);
        }

        Ok(config)
    }

    /// Set the listen address.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Set the gate data file path.
    pub fn with_gates_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.gates_path = path.into();
        self
    }
}
