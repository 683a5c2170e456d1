//! Legends, myths and rumors told inside a project's world.

use crate::code::ResultCode;
use crate::entity::{Audit, Column, Entity, EntityDef, PageParams, Predicate, SearchFilter, NAME_MAX_LEN};
use crate::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lore {
    pub lore_no: i64,
    pub prj_no: i64,
    pub lore_nm: String,
    pub lore_type: Option<String>,
    pub main_subj: Option<String>,
    pub smry: Option<String>,
    pub trans_mthd: Option<String>,
    pub pub_perc: Option<String>,
    pub lore_plot: Option<String>,
    pub real_fact: Option<String>,
    pub dist_rsn: Option<String>,
    pub diff_desc: Option<String>,
    pub cltr_impact: Option<String>,
    pub plot_conn: Option<String>,
    pub rmk: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoreDraft {
    pub prj_no: Option<i64>,
    pub lore_nm: Option<String>,
    pub lore_type: Option<String>,
    pub main_subj: Option<String>,
    pub smry: Option<String>,
    pub trans_mthd: Option<String>,
    pub pub_perc: Option<String>,
    pub lore_plot: Option<String>,
    pub real_fact: Option<String>,
    pub dist_rsn: Option<String>,
    pub diff_desc: Option<String>,
    pub cltr_impact: Option<String>,
    pub plot_conn: Option<String>,
    pub rmk: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LorePatch {
    pub lore_nm: Option<String>,
    pub lore_type: Option<String>,
    pub main_subj: Option<String>,
    pub smry: Option<String>,
    pub trans_mthd: Option<String>,
    pub pub_perc: Option<String>,
    pub lore_plot: Option<String>,
    pub real_fact: Option<String>,
    pub dist_rsn: Option<String>,
    pub diff_desc: Option<String>,
    pub cltr_impact: Option<String>,
    pub plot_conn: Option<String>,
    pub rmk: Option<String>,
}

impl Entity for Lore {
    type Draft = LoreDraft;
    type Patch = LorePatch;
    type Filter = SearchFilter;

    const DEF: EntityDef = EntityDef {
        name: "lore",
        path: "/lores",
        table: "lores",
        key: "lore_no",
        columns: &[
            Column::int("prj_no").required(),
            Column::text("lore_nm").required().max_len(NAME_MAX_LEN),
            Column::text("lore_type"),
            Column::text("main_subj"),
            Column::text("smry"),
            Column::text("trans_mthd"),
            Column::text("pub_perc"),
            Column::text("lore_plot"),
            Column::text("real_fact"),
            Column::text("dist_rsn"),
            Column::text("diff_desc"),
            Column::text("cltr_impact"),
            Column::text("plot_conn"),
            Column::text("rmk"),
        ],
        search: &[("loreNm", "lore_nm"), ("smry", "smry")],
        scope: Some("prj_no"),
        not_found: ResultCode::LoreNotFound,
        not_found_message: "lore not found",
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
