//! Shared application state for the service-level routes.

use crate::config::AppConfig;
use crate::store::Storage;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AppState {
    pub storage: Storage,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(storage: Storage, config: AppConfig) -> Self {
        AppState {
            storage,
            config: Arc::new(config),
        }
    }
}
