//! Typed bind values and the conversion from request bodies to column values.

use crate::case::to_camel_case;
use crate::entity::{Column, ColumnType, EntityDef};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// A value bound to a query parameter. Nulls carry their column type so
/// backends with strict typing bind the right kind of NULL.
#[derive(Clone, Debug, PartialEq)]
pub enum BindValue {
    Int(i64),
    Text(String),
    Timestamp(DateTime<Utc>),
    Null(ColumnType),
}

impl BindValue {
    pub fn from_json(column: &Column, v: &Value) -> Result<Self, AppError> {
        if v.is_null() {
            return Ok(BindValue::Null(column.ty));
        }
        let field = || to_camel_case(column.name);
        match column.ty {
            ColumnType::Int => v
                .as_i64()
                .map(BindValue::Int)
                .ok_or_else(|| AppError::Validation(format!("{} must be an integer", field()))),
            ColumnType::Text => v
                .as_str()
                .map(|s| BindValue::Text(s.to_string()))
                .ok_or_else(|| AppError::Validation(format!("{} must be a string", field()))),
            ColumnType::Timestamp => v
                .as_str()
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                .map(|t| BindValue::Timestamp(t.with_timezone(&Utc)))
                .ok_or_else(|| AppError::Validation(format!("{} must be an RFC 3339 timestamp", field()))),
        }
    }
}

fn to_object<T: Serialize>(body: &T) -> Result<Map<String, Value>, AppError> {
    match serde_json::to_value(body).map_err(|e| AppError::Internal(e.to_string()))? {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::Internal("request body did not serialize to an object".into())),
    }
}

/// Every writable column in declaration order; absent fields become typed NULLs.
pub fn draft_values<T: Serialize>(
    def: &EntityDef,
    draft: &T,
) -> Result<Vec<(&'static str, BindValue)>, AppError> {
    let map = to_object(draft)?;
    def.columns
        .iter()
        .map(|c| {
            let v = map.get(&to_camel_case(c.name)).unwrap_or(&Value::Null);
            Ok((c.name, BindValue::from_json(c, v)?))
        })
        .collect()
}

/// Only the columns the patch sets. Absent and null fields are left untouched.
pub fn patch_values<T: Serialize>(
    def: &EntityDef,
    patch: &T,
) -> Result<Vec<(&'static str, BindValue)>, AppError> {
    let map = to_object(patch)?;
    let mut out = Vec::new();
    for c in def.columns {
        match map.get(&to_camel_case(c.name)) {
            None | Some(Value::Null) => continue,
            Some(v) => out.push((c.name, BindValue::from_json(c, v)?)),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Character, CharacterDraft, CharacterPatch, Entity};

    #[test]
    fn draft_fills_missing_with_typed_nulls() {
        let draft = CharacterDraft {
            prj_no: Some(3),
            char_nm: Some("Ilse".into()),
            ..Default::default()
        };
        let values = draft_values(&Character::DEF, &draft).unwrap();
        assert_eq!(values.len(), Character::DEF.columns.len());
        assert_eq!(values[0], ("prj_no", BindValue::Int(3)));
        assert_eq!(values[1], ("char_nm", BindValue::Text("Ilse".into())));
        assert!(values.contains(&("race_no", BindValue::Null(ColumnType::Int))));
        assert!(values.contains(&("logline", BindValue::Null(ColumnType::Text))));
    }

    #[test]
    fn patch_keeps_only_set_fields() {
        let patch = CharacterPatch {
            logline: Some("a drifter".into()),
            org_no: Some(9),
            ..Default::default()
        };
        let values = patch_values(&Character::DEF, &patch).unwrap();
        assert_eq!(
            values,
            vec![
                ("logline", BindValue::Text("a drifter".into())),
                ("org_no", BindValue::Int(9)),
            ]
        );
        assert!(patch_values(&Character::DEF, &CharacterPatch::default()).unwrap().is_empty());
    }

    #[test]
    fn timestamps_parse_from_rfc3339() {
        let col = Column::timestamp("crt_dt");
        let v = BindValue::from_json(&col, &Value::String("2024-05-01T10:00:00+09:00".into())).unwrap();
        match v {
            BindValue::Timestamp(t) => assert_eq!(t.to_rfc3339(), "2024-05-01T01:00:00+00:00"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(BindValue::from_json(&col, &Value::String("yesterday".into())).is_err());
    }
}
