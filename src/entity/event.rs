//! Historical events of a project's setting.

use crate::code::ResultCode;
use crate::entity::{Audit, Column, Entity, EntityDef, PageParams, Predicate, SearchFilter, NAME_MAX_LEN};
use crate::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_no: i64,
    pub prj_no: i64,
    pub event_nm: String,
    /// In-world time, free text.
    pub occur_time: Option<String>,
    pub occur_loc: Option<String>,
    pub smry: Option<String>,
    pub cause_pub: Option<String>,
    pub cause_real: Option<String>,
    pub rmk: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub prj_no: Option<i64>,
    pub event_nm: Option<String>,
    pub occur_time: Option<String>,
    pub occur_loc: Option<String>,
    pub smry: Option<String>,
    pub cause_pub: Option<String>,
    pub cause_real: Option<String>,
    pub rmk: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    pub event_nm: Option<String>,
    pub occur_time: Option<String>,
    pub occur_loc: Option<String>,
    pub smry: Option<String>,
    pub cause_pub: Option<String>,
    pub cause_real: Option<String>,
    pub rmk: Option<String>,
}

impl Entity for Event {
    type Draft = EventDraft;
    type Patch = EventPatch;
    type Filter = SearchFilter;

    const DEF: EntityDef = EntityDef {
        name: "event",
        path: "/events",
        table: "events",
        key: "event_no",
        columns: &[
            Column::int("prj_no").required(),
            Column::text("event_nm").required().max_len(NAME_MAX_LEN),
            Column::text("occur_time"),
            Column::text("occur_loc"),
            Column::text("smry"),
            Column::text("cause_pub"),
            Column::text("cause_real"),
            Column::text("rmk"),
        ],
        search: &[("eventNm", "event_nm"), ("smry", "smry")],
        scope: Some("prj_no"),
        not_found: ResultCode::EventNotFound,
        not_found_message: "event not found",
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
