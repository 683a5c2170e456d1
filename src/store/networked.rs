//! PostgreSQL adapter: a shared server reached over the network.

use crate::entity::ColumnType;
use crate::sql::{BindValue, Dialect, QueryBuf};
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgArguments, PgPool, Postgres};
use sqlx::query::Query;

fn bind_all<'q>(q: &'q QueryBuf) -> Query<'q, Postgres, PgArguments> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let mut query = sqlx::query(&q.sql);
    for p in &q.params {
        query = match p {
            BindValue::Int(n) => query.bind(*n),
            BindValue::Text(s) => query.bind(s.as_str()),
            BindValue::Timestamp(t) => query.bind(*t),
            BindValue::Null(ColumnType::Int) => query.bind(None::<i64>),
            BindValue::Null(ColumnType::Text) => query.bind(None::<String>),
            BindValue::Null(ColumnType::Timestamp) => query.bind(None::<DateTime<Utc>>),
        };
    }
    query
}

entity_access!(PgAccess, PgPool, Dialect::Postgres);
