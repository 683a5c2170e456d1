//! Load config from `config/app.json` (or `WORLDBOOK_CONFIG`), then apply environment overrides.
//! Environment wins over the file.

use crate::config::types::AppConfig;
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "WORLDBOOK_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config/app.json";

pub const ENV_DB_MODE: &str = "WORLDBOOK_DB_MODE";
pub const ENV_DB_PATH: &str = "WORLDBOOK_DB_PATH";
pub const ENV_DATABASE_URL: &str = "WORLDBOOK_DATABASE_URL";
pub const ENV_HOST: &str = "WORLDBOOK_HOST";
pub const ENV_PORT: &str = "WORLDBOOK_PORT";
pub const ENV_PAGE_SIZE: &str = "WORLDBOOK_PAGE_SIZE";

/// Load from the process environment: file named by `WORLDBOOK_CONFIG` (or the
/// default path, which may be absent), then env overrides.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    let lookup = |key: &str| std::env::var(key).ok();
    let explicit = lookup(CONFIG_PATH_ENV).filter(|s| !s.trim().is_empty());
    let config = match explicit {
        Some(path) => load_file(Path::new(&path))?,
        None => load_file_or_default(Path::new(DEFAULT_CONFIG_PATH))?,
    };
    apply_env_overrides(config, lookup)
}

/// Read and parse a config file. A missing file is an error.
pub fn load_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
    parse(&text).map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))
}

/// Like [`load_file`], but a missing file yields defaults.
pub fn load_file_or_default(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::info!("config file {} not found, using defaults", path.display());
        return Ok(AppConfig::default());
    }
    load_file(path)
}

pub fn parse(text: &str) -> Result<AppConfig, ConfigError> {
    serde_json::from_str(text).map_err(|e| ConfigError::Load(e.to_string()))
}

/// Apply overrides from `lookup` (normally the process environment).
/// Blank values are ignored; unparsable numbers are errors.
pub fn apply_env_overrides<F>(mut config: AppConfig, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if let Some(mode) = get(ENV_DB_MODE) {
        config.db.mode = mode;
    }
    if let Some(path) = get(ENV_DB_PATH) {
        config.db.local.path = path;
    }
    if let Some(url) = get(ENV_DATABASE_URL).or_else(|| get("DATABASE_URL")) {
        config.db.remote.connection_url = url;
    }
    if let Some(host) = get(ENV_HOST) {
        config.server.hostname = host;
    }
    if let Some(port) = get(ENV_PORT) {
        config.server.port = port
            .parse()
            .map_err(|_| ConfigError::Validation(format!("{} must be a port number", ENV_PORT)))?;
    }
    if let Some(size) = get(ENV_PAGE_SIZE) {
        config.pagination.page_size = size
            .parse()
            .map_err(|_| ConfigError::Validation(format!("{} must be a positive integer", ENV_PAGE_SIZE)))?;
    }
    Ok(config)
}

/// Directory that should exist before an embedded database file is opened.
pub fn database_dir(path: &str) -> Option<PathBuf> {
    Path::new(path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
}
