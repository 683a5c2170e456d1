//! Core rules: the laws of a setting (magic systems, physics, lore).

use crate::code::ResultCode;
use crate::entity::{Audit, Column, Entity, EntityDef, PageParams, Predicate, SearchFilter, NAME_MAX_LEN};
use crate::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreRule {
    pub core_no: i64,
    pub prj_no: i64,
    pub core_nm: String,
    pub def_desc: Option<String>,
    pub aply_scope: Option<String>,
    pub strc_elem: Option<String>,
    pub mech_desc: Option<String>,
    pub narr_aply: Option<String>,
    pub link_docs: Option<String>,
    pub rmk: Option<String>,
    pub lore_type: Option<String>,
    pub sub_lore_type: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreRuleDraft {
    pub prj_no: Option<i64>,
    pub core_nm: Option<String>,
    pub def_desc: Option<String>,
    pub aply_scope: Option<String>,
    pub strc_elem: Option<String>,
    pub mech_desc: Option<String>,
    pub narr_aply: Option<String>,
    pub link_docs: Option<String>,
    pub rmk: Option<String>,
    pub lore_type: Option<String>,
    pub sub_lore_type: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreRulePatch {
    pub core_nm: Option<String>,
    pub def_desc: Option<String>,
    pub aply_scope: Option<String>,
    pub strc_elem: Option<String>,
    pub mech_desc: Option<String>,
    pub narr_aply: Option<String>,
    pub link_docs: Option<String>,
    pub rmk: Option<String>,
    pub lore_type: Option<String>,
    pub sub_lore_type: Option<String>,
}

impl Entity for CoreRule {
    type Draft = CoreRuleDraft;
    type Patch = CoreRulePatch;
    type Filter = SearchFilter;

    const DEF: EntityDef = EntityDef {
        name: "core rule",
        path: "/core-rules",
        table: "core_rules",
        key: "core_no",
        columns: &[
            Column::int("prj_no").required(),
            Column::text("core_nm").required().max_len(NAME_MAX_LEN),
            Column::text("def_desc"),
            Column::text("aply_scope"),
            Column::text("strc_elem"),
            Column::text("mech_desc"),
            Column::text("narr_aply"),
            Column::text("link_docs"),
            Column::text("rmk"),
            Column::text("lore_type"),
            Column::text("sub_lore_type"),
        ],
        search: &[("coreNm", "core_nm"), ("defDesc", "def_desc")],
        scope: Some("prj_no"),
        not_found: ResultCode::CoreRuleNotFound,
        not_found_message: "core rule not found",
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
