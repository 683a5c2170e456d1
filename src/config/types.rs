//! Raw config types matching `config/app.json`. Every field is optional in the file.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub server: ServerConfig,
    pub db: DbConfig,
    pub pagination: PaginationConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub hostname: String,
    pub port: u16,
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            hostname: "127.0.0.1".into(),
            port: 3456,
            body_limit_bytes: 1024 * 1024,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DbConfig {
    /// Raw mode token; parsed by [`crate::config::resolve_storage`].
    pub mode: String,
    pub local: LocalDbConfig,
    pub remote: RemoteDbConfig,
}

impl Default for DbConfig {
    fn default() -> Self {
        DbConfig {
            mode: StorageMode::Embedded.as_str().into(),
            local: LocalDbConfig::default(),
            remote: RemoteDbConfig::default(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocalDbConfig {
    pub path: String,
}

impl Default for LocalDbConfig {
    fn default() -> Self {
        LocalDbConfig {
            path: "./data/app.db".into(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RemoteDbConfig {
    pub connection_url: String,
    pub max_connections: u32,
}

impl Default for RemoteDbConfig {
    fn default() -> Self {
        RemoteDbConfig {
            connection_url: String::new(),
            max_connections: 5,
        }
    }
}

/// Defaults for list queries that omit `page` / `pageSize`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginationConfig {
    pub page_size: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        PaginationConfig { page_size: 10 }
    }
}

/// Which backend serves every entity for the life of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// SQLite file owned by this process.
    Embedded,
    /// PostgreSQL server reached over the network.
    Networked,
}

impl StorageMode {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageMode::Embedded => "embedded",
            StorageMode::Networked => "networked",
        }
    }
}

impl fmt::Display for StorageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "embedded" | "local" => Ok(StorageMode::Embedded),
            "networked" | "remote" => Ok(StorageMode::Networked),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

/// Storage selection after validation: the mode plus only the parameters it needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageTarget {
    Embedded { path: String },
    Networked { url: String, max_connections: u32 },
}

impl StorageTarget {
    pub fn mode(&self) -> StorageMode {
        match self {
            StorageTarget::Embedded { .. } => StorageMode::Embedded,
            StorageTarget::Networked { .. } => StorageMode::Networked,
        }
    }
}
