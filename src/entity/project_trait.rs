//! Traits defined inside one project, next to the global trait pool.

use crate::code::ResultCode;
use crate::entity::{Audit, Column, Entity, EntityDef, PageParams, Predicate, SearchFilter, NAME_MAX_LEN};
use crate::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTrait {
    pub trait_no: i64,
    pub prj_no: i64,
    pub trait_nm: String,
    pub trait_expln: Option<String>,
    pub trait_lcls: Option<String>,
    pub trait_mcls: Option<String>,
    pub aply_trgt: Option<String>,
    /// Trait this one conflicts with.
    pub cnfl_trait_no: Option<i64>,
    /// Pool of the conflicting trait: GLOBAL or PROJECT.
    pub cnfl_trait_type: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTraitDraft {
    pub prj_no: Option<i64>,
    pub trait_nm: Option<String>,
    pub trait_expln: Option<String>,
    pub trait_lcls: Option<String>,
    pub trait_mcls: Option<String>,
    pub aply_trgt: Option<String>,
    pub cnfl_trait_no: Option<i64>,
    pub cnfl_trait_type: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTraitPatch {
    pub trait_nm: Option<String>,
    pub trait_expln: Option<String>,
    pub trait_lcls: Option<String>,
    pub trait_mcls: Option<String>,
    pub aply_trgt: Option<String>,
    pub cnfl_trait_no: Option<i64>,
    pub cnfl_trait_type: Option<String>,
}

impl Entity for ProjectTrait {
    type Draft = ProjectTraitDraft;
    type Patch = ProjectTraitPatch;
    type Filter = SearchFilter;

    const DEF: EntityDef = EntityDef {
        name: "project trait",
        path: "/project-traits",
        table: "project_traits",
        key: "trait_no",
        columns: &[
            Column::int("prj_no").required(),
            Column::text("trait_nm").required().max_len(NAME_MAX_LEN),
            Column::text("trait_expln"),
            Column::text("trait_lcls"),
            Column::text("trait_mcls"),
            Column::text("aply_trgt"),
            Column::int("cnfl_trait_no"),
            Column::text("cnfl_trait_type"),
        ],
        search: &[("traitNm", "trait_nm"), ("traitExpln", "trait_expln")],
        scope: Some("prj_no"),
        not_found: ResultCode::ProjectTraitNotFound,
        not_found_message: "project trait not found",
    };

    fn page_params(filter: &SearchFilter) -> PageParams {
        filter.page_params()
    }

    fn predicates(filter: &SearchFilter) -> Vec<Predicate> {
        filter.predicates(Self::DEF.scope, Self::DEF.search)
    }

    fn validate_filter(filter: &SearchFilter) -> Result<(), AppError> {
        filter.require_scope()?;
        filter.page_params().validate()
    }
}
