//! Global trait definitions (not scoped to a project).

use crate::code::ResultCode;
use crate::entity::{Audit, Column, Entity, EntityDef, PageParams, Predicate, SearchFilter, NAME_MAX_LEN};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trait {
    pub trait_no: i64,
    pub trait_nm: String,
    pub trait_expln: Option<String>,
    pub trait_lcls: Option<String>,
    pub trait_mcls: Option<String>,
    /// What the trait applies to: CHAR, ITEM, NATION, ORG, REGION.
    pub aply_trgt: Option<String>,
    /// Trait this one conflicts with.
    pub cnfl_trait_no: Option<i64>,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitDraft {
    pub trait_nm: Option<String>,
    pub trait_expln: Option<String>,
    pub trait_lcls: Option<String>,
    pub trait_mcls: Option<String>,
    pub aply_trgt: Option<String>,
    pub cnfl_trait_no: Option<i64>,
}

pub type TraitPatch = TraitDraft;

impl Entity for Trait {
    type Draft = TraitDraft;
    type Patch = TraitPatch;
    type Filter = SearchFilter;

    const DEF: EntityDef = EntityDef {
        name: "trait",
        path: "/traits",
        table: "traits",
        key: "trait_no",
        columns: &[
            Column::text("trait_nm").required().max_len(NAME_MAX_LEN),
            Column::text("trait_expln"),
            Column::text("trait_lcls"),
            Column::text("trait_mcls"),
            Column::text("aply_trgt"),
            Column::int("cnfl_trait_no"),
        ],
        search: &[("traitNm", "trait_nm"), ("traitExpln", "trait_expln")],
        scope: None,
        not_found: ResultCode::TraitNotFound,
        not_found_message: "trait not found",
    };

    fn page_params(filter: &SearchFilter) -> PageParams {
        filter.page_params()
    }

    fn predicates(filter: &SearchFilter) -> Vec<Predicate> {
        filter.predicates(Self::DEF.scope, Self::DEF.search)
    }
}
