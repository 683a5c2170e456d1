//! Regions of a project. A region may sit inside another region and belong to a nation.

use crate::code::ResultCode;
use crate::entity::{Audit, Column, Entity, EntityDef, PageParams, Predicate, SearchFilter, NAME_MAX_LEN};
use crate::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub region_no: i64,
    pub prj_no: i64,
    pub region_nm: String,
    /// Enclosing region.
    pub up_region_no: Option<i64>,
    pub region_type: Option<String>,
    pub explor_stat: Option<String>,
    pub region_expln: Option<String>,
    pub loc_desc: Option<String>,
    pub climate_env: Option<String>,
    pub terrain_feat: Option<String>,
    pub env_spec: Option<String>,
    pub func_feat: Option<String>,
    pub danger_lvl: Option<String>,
    pub danger_fctr: Option<String>,
    pub inhabit_info: Option<String>,
    pub unknown_entity: Option<String>,
    pub main_fclty: Option<String>,
    pub rsrc_list: Option<String>,
    /// Nation the region belongs to.
    pub ntn_no: Option<i64>,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionDraft {
    pub prj_no: Option<i64>,
    pub region_nm: Option<String>,
    pub up_region_no: Option<i64>,
    pub region_type: Option<String>,
    pub explor_stat: Option<String>,
    pub region_expln: Option<String>,
    pub loc_desc: Option<String>,
    pub climate_env: Option<String>,
    pub terrain_feat: Option<String>,
    pub env_spec: Option<String>,
    pub func_feat: Option<String>,
    pub danger_lvl: Option<String>,
    pub danger_fctr: Option<String>,
    pub inhabit_info: Option<String>,
    pub unknown_entity: Option<String>,
    pub main_fclty: Option<String>,
    pub rsrc_list: Option<String>,
    pub ntn_no: Option<i64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionPatch {
    pub region_nm: Option<String>,
    pub up_region_no: Option<i64>,
    pub region_type: Option<String>,
    pub explor_stat: Option<String>,
    pub region_expln: Option<String>,
    pub loc_desc: Option<String>,
    pub climate_env: Option<String>,
    pub terrain_feat: Option<String>,
    pub env_spec: Option<String>,
    pub func_feat: Option<String>,
    pub danger_lvl: Option<String>,
    pub danger_fctr: Option<String>,
    pub inhabit_info: Option<String>,
    pub unknown_entity: Option<String>,
    pub main_fclty: Option<String>,
    pub rsrc_list: Option<String>,
    pub ntn_no: Option<i64>,
}

impl Entity for Region {
    type Draft = RegionDraft;
    type Patch = RegionPatch;
    type Filter = SearchFilter;

    const DEF: EntityDef = EntityDef {
        name: "region",
        path: "/regions",
        table: "regions",
        key: "region_no",
        columns: &[
            Column::int("prj_no").required(),
            Column::text("region_nm").required().max_len(NAME_MAX_LEN),
            Column::int("up_region_no"),
            Column::text("region_type"),
            Column::text("explor_stat"),
            Column::text("region_expln"),
            Column::text("loc_desc"),
            Column::text("climate_env"),
            Column::text("terrain_feat"),
            Column::text("env_spec"),
            Column::text("func_feat"),
            Column::text("danger_lvl"),
            Column::text("danger_fctr"),
            Column::text("inhabit_info"),
            Column::text("unknown_entity"),
            Column::text("main_fclty"),
            Column::text("rsrc_list"),
            Column::int("ntn_no"),
        ],
        search: &[("regionNm", "region_nm"), ("regionExpln", "region_expln")],
        scope: Some("prj_no"),
        not_found: ResultCode::RegionNotFound,
        not_found_message: "region not found",
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
