//! Request validation from an entity's column rules.

use crate::case::to_camel_case;
use crate::entity::{Column, ColumnType, EntityDef};
use crate::error::AppError;
use serde::Serialize;
use serde_json::{Map, Value};

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create body: required columns present and non-blank, lengths within bounds.
    pub fn validate<T: Serialize>(def: &EntityDef, body: &T) -> Result<(), AppError> {
        let map = to_object(body)?;
        let mut issues = Vec::new();
        for column in def.columns {
            let value = map.get(&to_camel_case(column.name)).unwrap_or(&Value::Null);
            if column.required && is_blank(value) {
                issues.push(format!("{} is required", to_camel_case(column.name)));
                continue;
            }
            check_field(column, value, &mut issues);
        }
        finish(issues)
    }

    /// Validate only the fields present in a partial body (PATCH). A required
    /// column may be omitted but not blanked.
    pub fn validate_partial<T: Serialize>(def: &EntityDef, body: &T) -> Result<(), AppError> {
        let map = to_object(body)?;
        let mut issues = Vec::new();
        for column in def.columns {
            let Some(value) = map.get(&to_camel_case(column.name)) else { continue };
            if value.is_null() {
                continue;
            }
            if column.required && is_blank(value) {
                issues.push(format!("{} must not be empty", to_camel_case(column.name)));
                continue;
            }
            check_field(column, value, &mut issues);
        }
        finish(issues)
    }
}

fn to_object<T: Serialize>(body: &T) -> Result<Map<String, Value>, AppError> {
    match serde_json::to_value(body).map_err(|e| AppError::Internal(e.to_string()))? {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::Validation("body must be a JSON object".into())),
    }
}

fn is_blank(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn check_field(column: &Column, v: &Value, issues: &mut Vec<String>) {
    if v.is_null() {
        return;
    }
    let field = to_camel_case(column.name);
    match column.ty {
        ColumnType::Text => {
            if let (Some(s), Some(max)) = (v.as_str(), column.max_len) {
                if s.chars().count() > max {
                    issues.push(format!("{} must be at most {} characters", field, max));
                }
            }
        }
        ColumnType::Int => {
            if v.as_i64().is_none() {
                issues.push(format!("{} must be an integer", field));
            }
        }
        ColumnType::Timestamp => {}
    }
}

fn finish(issues: Vec<String>) -> Result<(), AppError> {
    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(issues.join("; ")))
    }
}
