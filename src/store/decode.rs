//! Row to entity decoding, shared by both backends.

use crate::case::to_camel_case;
use crate::entity::{ColumnType, Entity};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::{ColumnIndex, Decode, Row, Type};

/// Read every selected column by its declared type and deserialize the entity
/// from the resulting camelCase object.
pub(crate) fn row_to_entity<E, R>(row: &R) -> Result<E, AppError>
where
    E: Entity,
    R: Row,
    for<'a> &'a str: ColumnIndex<R>,
    for<'r> i64: Decode<'r, R::Database> + Type<R::Database>,
    for<'r> String: Decode<'r, R::Database> + Type<R::Database>,
    for<'r> DateTime<Utc>: Decode<'r, R::Database> + Type<R::Database>,
{
    let mut map = Map::new();
    for column in E::DEF.select_columns() {
        let name = column.name;
        let value = match column.ty {
            ColumnType::Int => row
                .try_get::<Option<i64>, _>(name)
                .map(|v| v.map(Value::from)),
            ColumnType::Text => row
                .try_get::<Option<String>, _>(name)
                .map(|v| v.map(Value::String)),
            ColumnType::Timestamp => row
                .try_get::<Option<DateTime<Utc>>, _>(name)
                .map(|v| v.map(|t| Value::String(t.to_rfc3339()))),
        }
        .map_err(|e| AppError::Decode(format!("{}.{}: {}", E::DEF.table, name, e)))?;
        map.insert(to_camel_case(name), value.unwrap_or(Value::Null));
    }
    serde_json::from_value(Value::Object(map))
        .map_err(|e| AppError::Decode(format!("{}: {}", E::DEF.table, e)))
}

/// First column of a COUNT(*) row.
pub(crate) fn count_of<R>(row: &R) -> Result<u64, AppError>
where
    R: Row,
    usize: ColumnIndex<R>,
    for<'r> i64: Decode<'r, R::Database> + Type<R::Database>,
{
    let n: i64 = row.try_get(0usize).map_err(|e| AppError::Decode(e.to_string()))?;
    Ok(u64::try_from(n).unwrap_or(0))
}
