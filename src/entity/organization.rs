use crate::code::ResultCode;
use crate::entity::{Audit, Column, Entity, EntityDef, PageParams, Predicate, SearchFilter, NAME_MAX_LEN};
use crate::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub org_no: i64,
    pub prj_no: i64,
    pub org_nm: String,
    pub org_type: Option<String>,
    pub logline: Option<String>,
    pub org_theme: Option<String>,
    /// Stated purpose.
    pub purp_pub: Option<String>,
    /// Actual purpose, hidden from outsiders.
    pub purp_hid: Option<String>,
    pub org_scale: Option<String>,
    pub curr_stat: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDraft {
    pub prj_no: Option<i64>,
    pub org_nm: Option<String>,
    pub org_type: Option<String>,
    pub logline: Option<String>,
    pub org_theme: Option<String>,
    pub purp_pub: Option<String>,
    pub purp_hid: Option<String>,
    pub org_scale: Option<String>,
    pub curr_stat: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationPatch {
    pub org_nm: Option<String>,
    pub org_type: Option<String>,
    pub logline: Option<String>,
    pub org_theme: Option<String>,
    pub purp_pub: Option<String>,
    pub purp_hid: Option<String>,
    pub org_scale: Option<String>,
    pub curr_stat: Option<String>,
}

impl Entity for Organization {
    type Draft = OrganizationDraft;
    type Patch = OrganizationPatch;
    type Filter = SearchFilter;

    const DEF: EntityDef = EntityDef {
        name: "organization",
        path: "/organizations",
        table: "organizations",
        key: "org_no",
        columns: &[
            Column::int("prj_no").required(),
            Column::text("org_nm").required().max_len(NAME_MAX_LEN),
            Column::text("org_type"),
            Column::text("logline"),
            Column::text("org_theme"),
            Column::text("purp_pub"),
            Column::text("purp_hid"),
            Column::text("org_scale"),
            Column::text("curr_stat"),
        ],
        search: &[("orgNm", "org_nm"), ("logline", "logline")],
        scope: Some("prj_no"),
        not_found: ResultCode::OrganizationNotFound,
        not_found_message: "organization not found",
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
