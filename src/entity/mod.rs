//! Entity catalogue and the static description each entity hands to the generic layers.
//!
//! An entity contributes types (row, draft, patch, filter) and an [`EntityDef`]:
//! table, key, columns, search fields, optional project scope and its not-found
//! code. Everything else (SQL, paging, envelopes) is shared.

pub mod access;
pub mod filter;
pub mod pool;

mod ability;
mod character;
mod core_rule;
mod creature;
mod event;
mod item;
mod lore;
mod nation;
mod organization;
mod project;
mod project_ability;
mod project_trait;
mod region;
mod traits;

pub use ability::{Ability, AbilityDraft, AbilityPatch};
pub use access::{EntityAccess, Fetched, PageRequest};
pub use character::{Character, CharacterDraft, CharacterPatch};
pub use core_rule::{CoreRule, CoreRuleDraft, CoreRulePatch};
pub use creature::{Creature, CreatureDraft, CreaturePatch};
pub use event::{Event, EventDraft, EventPatch};
pub use filter::{KeyScope, PageParams, Predicate, SearchFilter};
pub use item::{Item, ItemDraft, ItemPatch};
pub use lore::{Lore, LoreDraft, LorePatch};
pub use nation::{Nation, NationDraft, NationPatch};
pub use organization::{Organization, OrganizationDraft, OrganizationPatch};
pub use pool::{PoolEntry, PoolMember, PoolQuery, PoolType};
pub use project::{Project, ProjectDraft, ProjectPatch};
pub use project_ability::{ProjectAbility, ProjectAbilityDraft, ProjectAbilityPatch};
pub use project_trait::{ProjectTrait, ProjectTraitDraft, ProjectTraitPatch};
pub use region::{Region, RegionDraft, RegionPatch};
pub use traits::{Trait, TraitDraft, TraitPatch};

use crate::code::ResultCode;
use crate::error::AppError;
use crate::service::RequestValidator;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Storage type of a column. Drives DDL, parameter binding and row decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    Int,
    Text,
    Timestamp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub ty: ColumnType,
    pub required: bool,
    /// Maximum accepted length for text input.
    pub max_len: Option<usize>,
}

impl Column {
    pub const fn int(name: &'static str) -> Self {
        Column { name, ty: ColumnType::Int, required: false, max_len: None }
    }

    pub const fn text(name: &'static str) -> Self {
        Column { name, ty: ColumnType::Text, required: false, max_len: Some(TEXT_MAX_LEN) }
    }

    pub const fn timestamp(name: &'static str) -> Self {
        Column { name, ty: ColumnType::Timestamp, required: false, max_len: None }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn max_len(mut self, max: usize) -> Self {
        self.max_len = Some(max);
        self
    }
}

pub const NAME_MAX_LEN: usize = 200;
pub const TEXT_MAX_LEN: usize = 10_000;

pub const DEL_YN: &str = "del_yn";
pub const CRT_DT: &str = "crt_dt";
pub const UPDT_DT: &str = "updt_dt";
pub const DEL_DT: &str = "del_dt";

/// Audit columns present on every entity table.
pub const COMMON_COLUMNS: &[Column] = &[
    Column::text("use_yn"),
    Column::text("shrn_yn"),
    Column::text(DEL_YN),
    Column::timestamp(CRT_DT),
    Column::timestamp(UPDT_DT),
    Column::timestamp(DEL_DT),
];

/// Static description of one entity kind.
#[derive(Clone, Copy, Debug)]
pub struct EntityDef {
    /// Human label used in logs and messages, e.g. "trait".
    pub name: &'static str,
    /// Mount path, e.g. "/traits".
    pub path: &'static str,
    pub table: &'static str,
    /// Integer primary key, generated on insert.
    pub key: &'static str,
    /// Writable columns (key and audit columns excluded).
    pub columns: &'static [Column],
    /// `searchType` token to column.
    pub search: &'static [(&'static str, &'static str)],
    /// Project scope column for entities that live inside a project.
    pub scope: Option<&'static str>,
    pub not_found: ResultCode,
    pub not_found_message: &'static str,
}

impl EntityDef {
    /// Key, writable and audit columns in SELECT order.
    pub fn select_columns(&self) -> impl Iterator<Item = Column> + '_ {
        std::iter::once(Column::int(self.key))
            .chain(self.columns.iter().copied())
            .chain(COMMON_COLUMNS.iter().copied())
    }

    /// Distinct columns reachable through keyword search, in declaration order.
    pub fn search_columns(&self) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = Vec::new();
        for (_, column) in self.search {
            if !out.contains(column) {
                out.push(*column);
            }
        }
        out
    }

    pub fn is_searchable(&self, column: &str) -> bool {
        self.search.iter().any(|(_, c)| *c == column)
    }

    #[cfg(test)]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Audit fields shared by every row, flattened into the row's JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    pub use_yn: Option<String>,
    pub shrn_yn: Option<String>,
    pub del_yn: Option<String>,
    pub crt_dt: Option<DateTime<Utc>>,
    pub updt_dt: Option<DateTime<Utc>>,
    pub del_dt: Option<DateTime<Utc>>,
}

/// An entity kind. Implemented on the row type; the associated types are the
/// create input, the partial update input and the list filter.
pub trait Entity:
    Serialize + DeserializeOwned + Clone + Debug + PartialEq + Send + Sync + 'static
{
    type Draft: Serialize + DeserializeOwned + Debug + Send + Sync + 'static;
    type Patch: Serialize + DeserializeOwned + Debug + Default + Send + Sync + 'static;
    type Filter: DeserializeOwned + Debug + Default + Send + Sync + 'static;

    const DEF: EntityDef;

    fn page_params(filter: &Self::Filter) -> PageParams;

    fn predicates(filter: &Self::Filter) -> Vec<Predicate>;

    fn validate_filter(filter: &Self::Filter) -> Result<(), AppError> {
        Self::page_params(filter).validate()
    }

    fn validate_draft(draft: &Self::Draft) -> Result<(), AppError> {
        RequestValidator::validate(&Self::DEF, draft)
    }

    fn validate_patch(patch: &Self::Patch) -> Result<(), AppError> {
        RequestValidator::validate_partial(&Self::DEF, patch)
    }
}

/// Definitions of every mounted entity, in mount order.
pub const ALL_DEFS: &[EntityDef] = &[
    Project::DEF,
    Trait::DEF,
    Ability::DEF,
    ProjectTrait::DEF,
    ProjectAbility::DEF,
    CoreRule::DEF,
    Creature::DEF,
    Character::DEF,
    Item::DEF,
    Region::DEF,
    Nation::DEF,
    Organization::DEF,
    Event::DEF,
    Lore::DEF,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalogue_is_consistent() {
        let mut paths = HashSet::new();
        let mut tables = HashSet::new();
        let mut codes = HashSet::new();
        for def in ALL_DEFS {
            assert!(paths.insert(def.path), "duplicate path {}", def.path);
            assert!(tables.insert(def.table), "duplicate table {}", def.table);
            assert!(codes.insert(def.not_found), "shared not-found code {}", def.not_found);
            assert!(!def.not_found.is_success());
            assert!(!def.not_found_message.is_empty());
            assert!(def.column(def.key).is_none(), "{} lists its key as writable", def.table);
            if let Some(scope) = def.scope {
                assert!(def.column(scope).is_some(), "{} scope column missing", def.table);
            }
            for (_, column) in def.search {
                assert!(def.column(column).is_some(), "{} search column {} missing", def.table, column);
                assert!(def.is_searchable(column));
            }
            for column in def.search_columns() {
                assert_eq!(def.column(column).map(|c| c.ty), Some(ColumnType::Text), "{} folds {}", def.table, column);
            }
        }
    }

    #[test]
    fn search_columns_are_distinct() {
        const DEF: EntityDef = EntityDef {
            search: &[("a", "col_a"), ("b", "col_b"), ("both", "col_a")],
            ..Trait::DEF
        };
        assert_eq!(DEF.search_columns(), ["col_a", "col_b"]);
        assert!(DEF.is_searchable("col_b"));
        assert!(!DEF.is_searchable("trait_nm"));
    }

    #[test]
    fn select_columns_starts_with_key_and_ends_with_audit() {
        let cols: Vec<&str> = Trait::DEF.select_columns().map(|c| c.name).collect();
        assert_eq!(cols.first(), Some(&"trait_no"));
        assert_eq!(cols.last(), Some(&DEL_DT));
        assert_eq!(cols.len(), 1 + Trait::DEF.columns.len() + COMMON_COLUMNS.len());
    }
}
