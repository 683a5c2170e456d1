//! Worldbook: a REST backend for world-building projects. Projects hold characters,
//! creatures, items, regions, nations, organizations, events, lores and core rules,
//! plus their own traits and abilities next to the global pools.
//!
//! Every reply is an [`Envelope`] at transport status 200; lists are paged with [`ListPage`].
//! Storage is either an embedded SQLite file or a networked PostgreSQL server, chosen once
//! at startup.

pub mod case;
pub mod code;
pub mod config;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use code::ResultCode;
pub use config::{load_from_env, validate, AppConfig, StorageMode, StorageTarget};
pub use entity::{Entity, EntityAccess, EntityDef, ALL_DEFS};
pub use error::{AppError, ConfigError};
pub use response::{paginate, Deleted, Envelope, ListPage};
pub use routes::{app_router, common_routes, entity_routes, search_routes};
pub use service::{EntityService, PoolSearch};
pub use state::AppState;
pub use store::Storage;
