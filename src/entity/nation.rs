use crate::code::ResultCode;
use crate::entity::{Audit, Column, Entity, EntityDef, PageParams, Predicate, SearchFilter, NAME_MAX_LEN};
use crate::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nation {
    pub ntn_no: i64,
    pub prj_no: i64,
    pub ntn_nm: String,
    pub ntn_type: Option<String>,
    pub logline: Option<String>,
    pub capital_nm: Option<String>,
    pub ruler_txt: Option<String>,
    pub pol_sys: Option<String>,
    pub admin_law: Option<String>,
    pub state_rlgn: Option<String>,
    pub rlgn_desc: Option<String>,
    pub nat_idlg: Option<String>,
    pub main_plcy: Option<String>,
    pub taboo_act: Option<String>,
    pub dipl_plcy: Option<String>,
    pub intr_cnfl: Option<String>,
    pub hidden_fact: Option<String>,
    pub econ_struct: Option<String>,
    pub soc_cltr: Option<String>,
    pub mil_pwr: Option<String>,
    pub hist_desc: Option<String>,
    pub curr_issue: Option<String>,
    pub lore_type: Option<String>,
    pub sub_lore_type: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationDraft {
    pub prj_no: Option<i64>,
    pub ntn_nm: Option<String>,
    pub ntn_type: Option<String>,
    pub logline: Option<String>,
    pub capital_nm: Option<String>,
    pub ruler_txt: Option<String>,
    pub pol_sys: Option<String>,
    pub admin_law: Option<String>,
    pub state_rlgn: Option<String>,
    pub rlgn_desc: Option<String>,
    pub nat_idlg: Option<String>,
    pub main_plcy: Option<String>,
    pub taboo_act: Option<String>,
    pub dipl_plcy: Option<String>,
    pub intr_cnfl: Option<String>,
    pub hidden_fact: Option<String>,
    pub econ_struct: Option<String>,
    pub soc_cltr: Option<String>,
    pub mil_pwr: Option<String>,
    pub hist_desc: Option<String>,
    pub curr_issue: Option<String>,
    pub lore_type: Option<String>,
    pub sub_lore_type: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationPatch {
    pub ntn_nm: Option<String>,
    pub ntn_type: Option<String>,
    pub logline: Option<String>,
    pub capital_nm: Option<String>,
    pub ruler_txt: Option<String>,
    pub pol_sys: Option<String>,
    pub admin_law: Option<String>,
    pub state_rlgn: Option<String>,
    pub rlgn_desc: Option<String>,
    pub nat_idlg: Option<String>,
    pub main_plcy: Option<String>,
    pub taboo_act: Option<String>,
    pub dipl_plcy: Option<String>,
    pub intr_cnfl: Option<String>,
    pub hidden_fact: Option<String>,
    pub econ_struct: Option<String>,
    pub soc_cltr: Option<String>,
    pub mil_pwr: Option<String>,
    pub hist_desc: Option<String>,
    pub curr_issue: Option<String>,
    pub lore_type: Option<String>,
    pub sub_lore_type: Option<String>,
}

impl Entity for Nation {
    type Draft = NationDraft;
    type Patch = NationPatch;
    type Filter = SearchFilter;

    const DEF: EntityDef = EntityDef {
        name: "nation",
        path: "/nations",
        table: "nations",
        key: "ntn_no",
        columns: &[
            Column::int("prj_no").required(),
            Column::text("ntn_nm").required().max_len(NAME_MAX_LEN),
            Column::text("ntn_type"),
            Column::text("logline"),
            Column::text("capital_nm"),
            Column::text("ruler_txt"),
            Column::text("pol_sys"),
            Column::text("admin_law"),
            Column::text("state_rlgn"),
            Column::text("rlgn_desc"),
            Column::text("nat_idlg"),
            Column::text("main_plcy"),
            Column::text("taboo_act"),
            Column::text("dipl_plcy"),
            Column::text("intr_cnfl"),
            Column::text("hidden_fact"),
            Column::text("econ_struct"),
            Column::text("soc_cltr"),
            Column::text("mil_pwr"),
            Column::text("hist_desc"),
            Column::text("curr_issue"),
            Column::text("lore_type"),
            Column::text("sub_lore_type"),
        ],
        search: &[("ntnNm", "ntn_nm"), ("logline", "logline")],
        scope: Some("prj_no"),
        not_found: ResultCode::NationNotFound,
        not_found_message: "nation not found",
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
