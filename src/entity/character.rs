//! Characters of a project.

use crate::code::ResultCode;
use crate::entity::{Audit, Column, Entity, EntityDef, PageParams, Predicate, SearchFilter, NAME_MAX_LEN};
use crate::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub char_no: i64,
    pub prj_no: i64,
    pub char_nm: String,
    pub alias_nm: Option<String>,
    pub role_type: Option<String>,
    pub logline: Option<String>,
    pub narr_func: Option<String>,
    pub race_no: Option<i64>,
    pub ntn_no: Option<i64>,
    pub org_no: Option<i64>,
    pub org_rank: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDraft {
    pub prj_no: Option<i64>,
    pub char_nm: Option<String>,
    pub alias_nm: Option<String>,
    pub role_type: Option<String>,
    pub logline: Option<String>,
    pub narr_func: Option<String>,
    pub race_no: Option<i64>,
    pub ntn_no: Option<i64>,
    pub org_no: Option<i64>,
    pub org_rank: Option<String>,
}

/// A character never moves between projects, so `prjNo` is not patchable.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterPatch {
    pub char_nm: Option<String>,
    pub alias_nm: Option<String>,
    pub role_type: Option<String>,
    pub logline: Option<String>,
    pub narr_func: Option<String>,
    pub race_no: Option<i64>,
    pub ntn_no: Option<i64>,
    pub org_no: Option<i64>,
    pub org_rank: Option<String>,
}

impl Entity for Character {
    type Draft = CharacterDraft;
    type Patch = CharacterPatch;
    type Filter = SearchFilter;

    const DEF: EntityDef = EntityDef {
        name: "character",
        path: "/characters",
        table: "characters",
        key: "char_no",
        columns: &[
            Column::int("prj_no").required(),
            Column::text("char_nm").required().max_len(NAME_MAX_LEN),
            Column::text("alias_nm").max_len(NAME_MAX_LEN),
            Column::text("role_type"),
            Column::text("logline"),
            Column::text("narr_func"),
            Column::int("race_no"),
            Column::int("ntn_no"),
            Column::int("org_no"),
            Column::text("org_rank"),
        ],
        search: &[("charNm", "char_nm"), ("logline", "logline")],
        scope: Some("prj_no"),
        not_found: ResultCode::CharacterNotFound,
        not_found_message: "character not found",
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
