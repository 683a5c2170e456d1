//! Items (equipment, artifacts, consumables) of a project.

use crate::code::ResultCode;
use crate::entity::{Audit, Column, Entity, EntityDef, PageParams, Predicate, SearchFilter, NAME_MAX_LEN};
use crate::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub item_no: i64,
    pub prj_no: i64,
    pub item_nm: String,
    pub cls_main: Option<String>,
    pub cls_sub: Option<String>,
    pub item_grd: Option<String>,
    pub logline: Option<String>,
    pub app_desc: Option<String>,
    pub visual_feat: Option<String>,
    pub attr_type: Option<String>,
    pub dmg_type: Option<String>,
    pub main_func: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub prj_no: Option<i64>,
    pub item_nm: Option<String>,
    pub cls_main: Option<String>,
    pub cls_sub: Option<String>,
    pub item_grd: Option<String>,
    pub logline: Option<String>,
    pub app_desc: Option<String>,
    pub visual_feat: Option<String>,
    pub attr_type: Option<String>,
    pub dmg_type: Option<String>,
    pub main_func: Option<String>,
}

/// `prjNo` is fixed at creation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    pub item_nm: Option<String>,
    pub cls_main: Option<String>,
    pub cls_sub: Option<String>,
    pub item_grd: Option<String>,
    pub logline: Option<String>,
    pub app_desc: Option<String>,
    pub visual_feat: Option<String>,
    pub attr_type: Option<String>,
    pub dmg_type: Option<String>,
    pub main_func: Option<String>,
}

impl Entity for Item {
    type Draft = ItemDraft;
    type Patch = ItemPatch;
    type Filter = SearchFilter;

    const DEF: EntityDef = EntityDef {
        name: "item",
        path: "/items",
        table: "items",
        key: "item_no",
        columns: &[
            Column::int("prj_no").required(),
            Column::text("item_nm").required().max_len(NAME_MAX_LEN),
            Column::text("cls_main"),
            Column::text("cls_sub"),
            Column::text("item_grd"),
            Column::text("logline"),
            Column::text("app_desc"),
            Column::text("visual_feat"),
            Column::text("attr_type"),
            Column::text("dmg_type"),
            Column::text("main_func"),
        ],
        search: &[("itemNm", "item_nm"), ("logline", "logline")],
        scope: Some("prj_no"),
        not_found: ResultCode::ItemNotFound,
        not_found_message: "item not found",
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
