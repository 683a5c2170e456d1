//! DDL for the entity tables. Tables are created if missing, never altered.

use crate::entity::{Column, ColumnType, EntityDef, COMMON_COLUMNS, DEL_YN};
use crate::sql::{fold_column, quoted, Dialect};

fn type_str(dialect: Dialect, ty: ColumnType) -> &'static str {
    match (dialect, ty) {
        (Dialect::Sqlite, ColumnType::Int) => "INTEGER",
        (Dialect::Sqlite, ColumnType::Text) => "TEXT",
        (Dialect::Sqlite, ColumnType::Timestamp) => "TEXT",
        (Dialect::Postgres, ColumnType::Int) => "BIGINT",
        (Dialect::Postgres, ColumnType::Text) => "TEXT",
        (Dialect::Postgres, ColumnType::Timestamp) => "TIMESTAMPTZ",
    }
}

fn key_def(dialect: Dialect, key: &str) -> String {
    match dialect {
        Dialect::Sqlite => format!("{} INTEGER PRIMARY KEY AUTOINCREMENT", quoted(key)),
        Dialect::Postgres => format!("{} BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY", quoted(key)),
    }
}

fn column_def(dialect: Dialect, c: &Column) -> String {
    let mut def = format!("{} {}", quoted(c.name), type_str(dialect, c.ty));
    if c.required {
        def.push_str(" NOT NULL");
    }
    match c.name {
        "use_yn" => def.push_str(" DEFAULT 'Y'"),
        "shrn_yn" => def.push_str(" DEFAULT 'N'"),
        name if name == DEL_YN => def.push_str(" NOT NULL DEFAULT 'N'"),
        _ => {}
    }
    def
}

pub fn create_table(dialect: Dialect, def: &EntityDef) -> String {
    let mut parts = vec![key_def(dialect, def.key)];
    parts.extend(def.columns.iter().map(|c| column_def(dialect, c)));
    parts.extend(
        def.search_columns()
            .into_iter()
            .map(|c| format!("{} TEXT", quoted(&fold_column(c)))),
    );
    parts.extend(COMMON_COLUMNS.iter().map(|c| column_def(dialect, c)));
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quoted(def.table),
        parts.join(", ")
    )
}

/// Index on the project scope column, for scoped entities only.
pub fn create_scope_index(def: &EntityDef) -> Option<String> {
    def.scope.map(|scope| {
        format!(
            "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
            quoted(&format!("idx_{}_{}", def.table, scope)),
            quoted(def.table),
            quoted(scope)
        )
    })
}
