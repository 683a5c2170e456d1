//! Storage selection. One backend is chosen at startup from config and every
//! entity service is built on top of it through [`EntityAccess`].

#[macro_use]
mod adapter;
mod decode;
mod embedded;
mod networked;
pub mod schema;

pub use embedded::SqliteAccess;
pub use networked::PgAccess;

use crate::config::{StorageMode, StorageTarget, MEMORY_DATABASE};
use crate::entity::{Entity, EntityAccess, EntityDef};
use crate::error::{AppError, ConfigError};
use crate::sql::Dialect;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// An open connection pool to the selected backend.
#[derive(Clone, Debug)]
pub enum Storage {
    Embedded(SqlitePool),
    Networked(PgPool),
}

impl Storage {
    /// Open the pool and prove it reachable. Any failure here is startup-fatal.
    pub async fn connect(target: &StorageTarget) -> Result<Self, ConfigError> {
        let mode = target.mode();
        let unreachable = |source: sqlx::Error| ConfigError::Unreachable { mode, source };
        let storage = match target {
            StorageTarget::Embedded { path } => {
                Storage::Embedded(open_sqlite(path).await.map_err(unreachable)?)
            }
            StorageTarget::Networked { url, max_connections } => {
                let pool = PgPoolOptions::new()
                    .max_connections(*max_connections)
                    .acquire_timeout(CONNECT_TIMEOUT)
                    .connect(url)
                    .await
                    .map_err(unreachable)?;
                Storage::Networked(pool)
            }
        };
        storage.ping().await.map_err(|e| match e {
            AppError::Db(source) => ConfigError::Unreachable { mode, source },
            other => ConfigError::Validation(other.to_string()),
        })?;
        tracing::info!(mode = %mode, "storage connected");
        Ok(storage)
    }

    pub fn mode(&self) -> StorageMode {
        match self {
            Storage::Embedded(_) => StorageMode::Embedded,
            Storage::Networked(_) => StorageMode::Networked,
        }
    }

    pub fn dialect(&self) -> Dialect {
        match self {
            Storage::Embedded(_) => Dialect::Sqlite,
            Storage::Networked(_) => Dialect::Postgres,
        }
    }

    /// Data access for one entity kind over this backend.
    pub fn access<E: Entity>(&self) -> Arc<dyn EntityAccess<E>> {
        match self {
            Storage::Embedded(pool) => Arc::new(SqliteAccess::<E>::new(pool.clone())),
            Storage::Networked(pool) => Arc::new(PgAccess::<E>::new(pool.clone())),
        }
    }

    /// Create missing tables and scope indexes. Existing tables are left as they are.
    pub async fn ensure_tables(&self, defs: &[EntityDef]) -> Result<(), AppError> {
        let dialect = self.dialect();
        for def in defs {
            let mut statements = vec![schema::create_table(dialect, def)];
            statements.extend(schema::create_scope_index(def));
            for sql in statements {
                tracing::debug!(sql = %sql, "ddl");
                match self {
                    Storage::Embedded(pool) => {
                        sqlx::query(&sql).execute(pool).await?;
                    }
                    Storage::Networked(pool) => {
                        sqlx::query(&sql).execute(pool).await?;
                    }
                }
            }
        }
        tracing::info!(tables = defs.len(), "schema ensured");
        Ok(())
    }

    /// Round-trip a trivial statement.
    pub async fn ping(&self) -> Result<(), AppError> {
        match self {
            Storage::Embedded(pool) => sqlx::query("SELECT 1").execute(pool).await.map(|_| ())?,
            Storage::Networked(pool) => sqlx::query("SELECT 1").execute(pool).await.map(|_| ())?,
        }
        Ok(())
    }

    pub async fn close(&self) {
        match self {
            Storage::Embedded(pool) => pool.close().await,
            Storage::Networked(pool) => pool.close().await,
        }
        tracing::info!(mode = %self.mode(), "storage closed");
    }
}

async fn open_sqlite(path: &str) -> Result<SqlitePool, sqlx::Error> {
    if path == MEMORY_DATABASE {
        // Every connection to :memory: is a separate database; keep exactly one alive.
        let opts = SqliteConnectOptions::from_str("sqlite::memory:")?;
        return SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opts)
            .await;
    }
    if let Some(dir) = crate::config::database_dir(path) {
        std::fs::create_dir_all(&dir).map_err(sqlx::Error::Io)?;
    }
    let opts = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    SqlitePoolOptions::new().connect_with(opts).await
}
