use crate::code::ResultCode;
use crate::entity::{Audit, Column, Entity, EntityDef, PageParams, Predicate, SearchFilter, NAME_MAX_LEN};
use crate::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creature {
    pub creature_no: i64,
    pub prj_no: i64,
    pub creature_nm: String,
    pub creature_type: Option<String>,
    pub danger_grd: Option<String>,
    pub ident_stat: Option<String>,
    pub creature_expln: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureDraft {
    pub prj_no: Option<i64>,
    pub creature_nm: Option<String>,
    pub creature_type: Option<String>,
    pub danger_grd: Option<String>,
    pub ident_stat: Option<String>,
    pub creature_expln: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreaturePatch {
    pub creature_nm: Option<String>,
    pub creature_type: Option<String>,
    pub danger_grd: Option<String>,
    pub ident_stat: Option<String>,
    pub creature_expln: Option<String>,
}

impl Entity for Creature {
    type Draft = CreatureDraft;
    type Patch = CreaturePatch;
    type Filter = SearchFilter;

    const DEF: EntityDef = EntityDef {
        name: "creature",
        path: "/creatures",
        table: "creatures",
        key: "creature_no",
        columns: &[
            Column::int("prj_no").required(),
            Column::text("creature_nm").required().max_len(NAME_MAX_LEN),
            Column::text("creature_type"),
            Column::text("danger_grd"),
            Column::text("ident_stat"),
            Column::text("creature_expln"),
        ],
        search: &[("creatureNm", "creature_nm"), ("creatureExpln", "creature_expln")],
        scope: Some("prj_no"),
        not_found: ResultCode::CreatureNotFound,
        not_found_message: "creature not found",
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
