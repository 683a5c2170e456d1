//! Abilities defined inside one project, next to the global ability pool.

use crate::code::ResultCode;
use crate::entity::{Audit, Column, Entity, EntityDef, PageParams, Predicate, SearchFilter, NAME_MAX_LEN};
use crate::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAbility {
    pub ability_no: i64,
    pub prj_no: i64,
    pub ability_nm: String,
    pub ability_type: Option<String>,
    pub ability_lcls: Option<String>,
    pub ability_expln: Option<String>,
    pub trgt_type: Option<String>,
    pub dmg_type: Option<String>,
    pub stat_eff_type: Option<String>,
    pub use_cost: Option<String>,
    pub cool_time: Option<i64>,
    pub cast_time: Option<i64>,
    pub use_cnd: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAbilityDraft {
    pub prj_no: Option<i64>,
    pub ability_nm: Option<String>,
    pub ability_type: Option<String>,
    pub ability_lcls: Option<String>,
    pub ability_expln: Option<String>,
    pub trgt_type: Option<String>,
    pub dmg_type: Option<String>,
    pub stat_eff_type: Option<String>,
    pub use_cost: Option<String>,
    pub cool_time: Option<i64>,
    pub cast_time: Option<i64>,
    pub use_cnd: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAbilityPatch {
    pub ability_nm: Option<String>,
    pub ability_type: Option<String>,
    pub ability_lcls: Option<String>,
    pub ability_expln: Option<String>,
    pub trgt_type: Option<String>,
    pub dmg_type: Option<String>,
    pub stat_eff_type: Option<String>,
    pub use_cost: Option<String>,
    pub cool_time: Option<i64>,
    pub cast_time: Option<i64>,
    pub use_cnd: Option<String>,
}

impl Entity for ProjectAbility {
    type Draft = ProjectAbilityDraft;
    type Patch = ProjectAbilityPatch;
    type Filter = SearchFilter;

    const DEF: EntityDef = EntityDef {
        name: "project ability",
        path: "/project-abilities",
        table: "project_abilities",
        key: "ability_no",
        columns: &[
            Column::int("prj_no").required(),
            Column::text("ability_nm").required().max_len(NAME_MAX_LEN),
            Column::text("ability_type"),
            Column::text("ability_lcls"),
            Column::text("ability_expln"),
            Column::text("trgt_type"),
            Column::text("dmg_type"),
            Column::text("stat_eff_type"),
            Column::text("use_cost"),
            Column::int("cool_time"),
            Column::int("cast_time"),
            Column::text("use_cnd"),
        ],
        search: &[("abilityNm", "ability_nm"), ("abilityExpln", "ability_expln")],
        scope: Some("prj_no"),
        not_found: ResultCode::ProjectAbilityNotFound,
        not_found_message: "project ability not found",
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
