use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Smallest buffer that still holds any success header we emit.
pub const MIN_BUFFER_SIZE: usize = 128;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub backlog: u32,
}

/// Where files are served from and how large the shared I/O buffer is.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    pub root: PathBuf,
    pub buffer_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:80".to_string(),
            backlog: 5,
        }
    }
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            buffer_size: 1024,
        }
    }
}

impl Config {
    /// Loads configuration from `FILEHOST_CONFIG` (a YAML file) when set,
    /// then applies the `LISTEN` and `FILEHOST_ROOT` overrides.
    pub fn load() -> Result<Self> {
        let mut cfg = match std::env::var("FILEHOST_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("FILEHOST_ROOT") {
            cfg.static_files.root = PathBuf::from(root);
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(raw).context("failed to parse YAML config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        self.server.socket_addr()?;

        if self.server.backlog == 0 {
            anyhow::bail!("server.backlog must be greater than zero");
        }
        if self.static_files.buffer_size < MIN_BUFFER_SIZE {
            anyhow::bail!(
                "static_files.buffer_size must be at least {} bytes (got {})",
                MIN_BUFFER_SIZE,
                self.static_files.buffer_size
            );
        }
        Ok(())
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr
            .parse()
            .with_context(|| format!("invalid listen address {:?}", self.listen_addr))
    }
}
