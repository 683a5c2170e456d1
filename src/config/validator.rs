//! Startup validation: turn raw config into a storage target or fail fast.

use crate::config::types::{AppConfig, DbConfig, StorageMode, StorageTarget};
use crate::error::ConfigError;

pub const MEMORY_DATABASE: &str = ":memory:";

/// Validate the whole config. Called once by the host before anything connects.
pub fn validate(config: &AppConfig) -> Result<StorageTarget, ConfigError> {
    if config.pagination.page_size == 0 {
        return Err(ConfigError::Validation("pagination.pageSize must be at least 1".into()));
    }
    if config.server.body_limit_bytes == 0 {
        return Err(ConfigError::Validation("server.bodyLimitBytes must be positive".into()));
    }
    resolve_storage(&config.db)
}

/// Parse the mode and check that it has the connection parameter it needs.
pub fn resolve_storage(db: &DbConfig) -> Result<StorageTarget, ConfigError> {
    let mode: StorageMode = db.mode.parse()?;
    match mode {
        StorageMode::Embedded => {
            let path = db.local.path.trim();
            if path.is_empty() {
                return Err(ConfigError::MissingDatabasePath);
            }
            Ok(StorageTarget::Embedded { path: path.to_string() })
        }
        StorageMode::Networked => {
            let url = db.remote.connection_url.trim();
            if url.is_empty() {
                return Err(ConfigError::MissingConnectionUrl);
            }
            Ok(StorageTarget::Networked {
                url: url.to_string(),
                max_connections: db.remote.max_connections.max(1),
            })
        }
    }
}
