//! Projects: the top-level container every scoped entity belongs to.

use crate::code::ResultCode;
use crate::entity::{Audit, Column, Entity, EntityDef, PageParams, Predicate, SearchFilter, NAME_MAX_LEN};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub prj_no: i64,
    pub prj_nm: String,
    pub genre_type: Option<String>,
    pub prj_desc: Option<String>,
    pub cvr_img_url: Option<String>,
    pub prj_expln: Option<String>,
    pub prj_ver: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub prj_nm: Option<String>,
    pub genre_type: Option<String>,
    pub prj_desc: Option<String>,
    pub cvr_img_url: Option<String>,
    pub prj_expln: Option<String>,
    pub prj_ver: Option<String>,
}

pub type ProjectPatch = ProjectDraft;

impl Entity for Project {
    type Draft = ProjectDraft;
    type Patch = ProjectPatch;
    type Filter = SearchFilter;

    const DEF: EntityDef = EntityDef {
        name: "project",
        path: "/projects",
        table: "projects",
        key: "prj_no",
        columns: &[
            Column::text("prj_nm").required().max_len(NAME_MAX_LEN),
            Column::text("genre_type"),
            Column::text("prj_desc"),
            Column::text("cvr_img_url").max_len(2048),
            Column::text("prj_expln"),
            Column::text("prj_ver").max_len(50),
        ],
        search: &[("prjNm", "prj_nm"), ("prjDesc", "prj_desc")],
        scope: None,
        not_found: ResultCode::ProjectNotFound,
        not_found_message: "project not found",
    };

    fn page_params(filter: &SearchFilter) -> PageParams {
        filter.page_params()
    }

    fn predicates(filter: &SearchFilter) -> Vec<Predicate> {
        filter.predicates(Self::DEF.scope, Self::DEF.search)
    }
}
