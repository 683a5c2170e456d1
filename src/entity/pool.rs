//! Combined trait and ability pools: the global catalogue next to a project's own entries.

use crate::entity::{Ability, Entity, PageParams, ProjectAbility, ProjectTrait, SearchFilter, Trait};
use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Which side of a pool to search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PoolType {
    #[default]
    All,
    Global,
    Project,
}

impl PoolType {
    pub fn includes_global(self) -> bool {
        matches!(self, PoolType::All | PoolType::Global)
    }

    pub fn includes_project(self) -> bool {
        matches!(self, PoolType::All | PoolType::Project)
    }
}

/// Query of `GET /search/{pool}`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolQuery {
    #[serde(rename = "type", default)]
    pub pool: PoolType,
    pub prj_no: Option<i64>,
    pub search_keyword: Option<String>,
    pub search_type: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PoolQuery {
    pub fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            page_size: self.page_size,
        }
    }

    /// The project whose entries join the global pool. Required even for `type=GLOBAL`.
    pub fn validate(&self) -> Result<i64, AppError> {
        let prj_no = self
            .prj_no
            .ok_or_else(|| AppError::BadRequest("prjNo is required and must be a number".into()))?;
        self.page_params().validate()?;
        Ok(prj_no)
    }

    /// Keyword filter for one side of the pool, unpaged.
    pub fn filter(&self, prj_no: Option<i64>) -> SearchFilter {
        SearchFilter {
            page: None,
            page_size: None,
            prj_no,
            search_keyword: self.search_keyword.clone(),
            search_type: self.search_type.clone(),
        }
    }
}

/// One search hit, tagged with the side it came from.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum PoolEntry<G, P> {
    Global(G),
    Project(P),
}

/// Entities that take part in a pool search. Hits are ordered by this name.
pub trait PoolMember: Entity<Filter = SearchFilter> {
    fn sort_name(&self) -> &str;
}

impl<G: PoolMember, P: PoolMember> PoolEntry<G, P> {
    pub fn sort_name(&self) -> &str {
        match self {
            PoolEntry::Global(g) => g.sort_name(),
            PoolEntry::Project(p) => p.sort_name(),
        }
    }
}

impl PoolMember for Trait {
    fn sort_name(&self) -> &str {
        &self.trait_nm
    }
}

impl PoolMember for ProjectTrait {
    fn sort_name(&self) -> &str {
        &self.trait_nm
    }
}

impl PoolMember for Ability {
    fn sort_name(&self) -> &str {
        &self.ability_nm
    }
}

impl PoolMember for ProjectAbility {
    fn sort_name(&self) -> &str {
        &self.ability_nm
    }
}
