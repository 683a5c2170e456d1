//! Builds parameterized SELECT, COUNT, INSERT, UPDATE and soft DELETE from an entity definition.
//!
//! Identifiers come only from the static catalogue; every value is a parameter.

use crate::entity::{ColumnType, EntityDef, PageRequest, Predicate, CRT_DT, DEL_DT, DEL_YN, UPDT_DT};
use crate::sql::BindValue;
use chrono::{DateTime, Utc};

/// Placeholder flavor of the target backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    Sqlite,
    Postgres,
}

impl Dialect {
    /// 1-based positional placeholder.
    pub fn placeholder(self, n: usize) -> String {
        match self {
            Dialect::Sqlite => format!("?{}", n),
            Dialect::Postgres => format!("${}", n),
        }
    }
}

/// Quote identifier (safe: only from the catalogue).
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
    dialect: Dialect,
}

impl QueryBuf {
    fn new(dialect: Dialect) -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
            dialect,
        }
    }

    /// Adds a parameter and returns its placeholder.
    fn push_param(&mut self, v: BindValue) -> String {
        self.params.push(v);
        self.dialect.placeholder(self.params.len())
    }
}

fn select_column_list(def: &EntityDef) -> String {
    def.select_columns()
        .map(|c| quoted(c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn live_only() -> String {
    format!("{} = 'N'", quoted(DEL_YN))
}

/// Case folding for searchable text and keywords: full-Unicode lowercase.
/// SQLite's `LOWER` folds ASCII only, so the database never folds.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Shadow column holding the folded copy of a searchable column.
pub fn fold_column(column: &str) -> String {
    format!("{}_fold", column)
}

/// The given values plus a folded copy of every searchable column among them.
fn with_folds(def: &EntityDef, values: &[(&str, BindValue)]) -> Vec<(String, BindValue)> {
    let mut out: Vec<(String, BindValue)> = values
        .iter()
        .map(|(name, v)| (name.to_string(), v.clone()))
        .collect();
    for (name, v) in values {
        if def.is_searchable(name) {
            let folded = match v {
                BindValue::Text(s) => BindValue::Text(fold(s)),
                _ => BindValue::Null(ColumnType::Text),
            };
            out.push((fold_column(name), folded));
        }
    }
    out
}

/// Escapes LIKE wildcards so a keyword matches literally.
fn like_pattern(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len() + 2);
    for c in fold(keyword).chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    format!("%{}%", escaped)
}

fn where_clause(q: &mut QueryBuf, predicates: &[Predicate]) -> String {
    let mut parts = vec![live_only()];
    for p in predicates {
        match p {
            Predicate::Eq(col, v) => {
                let ph = q.push_param(v.clone());
                parts.push(format!("{} = {}", quoted(col), ph));
            }
            Predicate::Contains(cols, keyword) => {
                let ph = q.push_param(BindValue::Text(like_pattern(keyword)));
                let any = cols
                    .iter()
                    .map(|c| format!("{} LIKE {} ESCAPE '\\'", quoted(&fold_column(c)), ph))
                    .collect::<Vec<_>>()
                    .join(" OR ");
                parts.push(format!("({})", any));
            }
        }
    }
    format!(" WHERE {}", parts.join(" AND "))
}

/// COUNT(*) of live rows matching the predicates.
pub fn count(dialect: Dialect, def: &EntityDef, predicates: &[Predicate]) -> QueryBuf {
    let mut q = QueryBuf::new(dialect);
    let where_clause = where_clause(&mut q, predicates);
    q.sql = format!("SELECT COUNT(*) FROM {}{}", quoted(def.table), where_clause);
    q
}

/// One page of live rows, newest key first.
pub fn select_page(
    dialect: Dialect,
    def: &EntityDef,
    predicates: &[Predicate],
    page: PageRequest,
) -> QueryBuf {
    let mut q = QueryBuf::new(dialect);
    let where_clause = where_clause(&mut q, predicates);
    q.sql = format!(
        "SELECT {} FROM {}{} ORDER BY {} DESC LIMIT {} OFFSET {}",
        select_column_list(def),
        quoted(def.table),
        where_clause,
        quoted(def.key),
        page.page_size,
        page.offset()
    );
    q
}

/// `key = ?` plus the project scope when one is given, on live rows only.
fn key_match(q: &mut QueryBuf, def: &EntityDef, key: i64, scope: Option<i64>) -> String {
    let ph = q.push_param(BindValue::Int(key));
    let mut parts = vec![format!("{} = {}", quoted(def.key), ph)];
    if let (Some(column), Some(prj_no)) = (def.scope, scope) {
        let ph = q.push_param(BindValue::Int(prj_no));
        parts.push(format!("{} = {}", quoted(column), ph));
    }
    parts.push(live_only());
    parts.join(" AND ")
}

pub fn select_by_key(dialect: Dialect, def: &EntityDef, key: i64, scope: Option<i64>) -> QueryBuf {
    let mut q = QueryBuf::new(dialect);
    let matched = key_match(&mut q, def, key, scope);
    q.sql = format!(
        "SELECT {} FROM {} WHERE {}",
        select_column_list(def),
        quoted(def.table),
        matched
    );
    q
}

/// INSERT the given columns, their folded copies and both audit stamps; returns the stored row.
pub fn insert(
    dialect: Dialect,
    def: &EntityDef,
    values: &[(&str, BindValue)],
    now: DateTime<Utc>,
) -> QueryBuf {
    let mut q = QueryBuf::new(dialect);
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for (name, v) in with_folds(def, values) {
        cols.push(quoted(&name));
        placeholders.push(q.push_param(v));
    }
    for stamp in [CRT_DT, UPDT_DT] {
        cols.push(quoted(stamp));
        placeholders.push(q.push_param(BindValue::Timestamp(now)));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(def.table),
        cols.join(", "),
        placeholders.join(", "),
        select_column_list(def)
    );
    q
}

/// UPDATE a live row: SET only the given columns and refresh `updt_dt`.
/// An empty patch still touches `updt_dt`, so the statement reports whether the row exists.
pub fn update(
    dialect: Dialect,
    def: &EntityDef,
    key: i64,
    scope: Option<i64>,
    values: &[(&str, BindValue)],
    now: DateTime<Utc>,
) -> QueryBuf {
    let mut q = QueryBuf::new(dialect);
    let mut sets = Vec::new();
    for (name, v) in with_folds(def, values) {
        let ph = q.push_param(v);
        sets.push(format!("{} = {}", quoted(&name), ph));
    }
    let ph = q.push_param(BindValue::Timestamp(now));
    sets.push(format!("{} = {}", quoted(UPDT_DT), ph));
    let matched = key_match(&mut q, def, key, scope);
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} RETURNING {}",
        quoted(def.table),
        sets.join(", "),
        matched,
        select_column_list(def)
    );
    q
}

/// Soft delete: marks a live row deleted. Zero affected rows means there was nothing to delete.
pub fn soft_delete(
    dialect: Dialect,
    def: &EntityDef,
    key: i64,
    scope: Option<i64>,
    now: DateTime<Utc>,
) -> QueryBuf {
    let mut q = QueryBuf::new(dialect);
    let now_ph = q.push_param(BindValue::Timestamp(now));
    let matched = key_match(&mut q, def, key, scope);
    q.sql = format!(
        "UPDATE {} SET {} = 'Y', {} = {} WHERE {}",
        quoted(def.table),
        quoted(DEL_YN),
        quoted(DEL_DT),
        now_ph,
        matched
    );
    q
}
