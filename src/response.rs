//! Standard response envelope and list paging structure.
//!
//! Every endpoint answers with [`TRANSPORT_STATUS`]; success or failure is read
//! from the body's `error` and `code` fields only.

use crate::code::ResultCode;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// The one transport status used for every reply, whatever the outcome.
pub const TRANSPORT_STATUS: StatusCode = StatusCode::OK;

const DEFAULT_FAILURE_MESSAGE: &str = "an error occurred";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub error: bool,
    pub code: ResultCode,
    pub message: String,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self::success(ResultCode::Ok, data)
    }

    pub fn created(data: T) -> Self {
        Self::success(ResultCode::Created, data)
    }

    /// Success envelope with a caller-chosen success code. A failure code here
    /// is a caller bug; it is replaced by OK so `error` and `code` never disagree.
    pub fn success(code: ResultCode, data: T) -> Self {
        let code = if code.is_success() { code } else { ResultCode::Ok };
        Envelope {
            data: Some(data),
            error: false,
            code,
            message: String::new(),
        }
    }

    pub fn fail(code: ResultCode, message: impl Into<String>) -> Self {
        Self::failure(code, message.into(), None)
    }

    /// Failure that still carries a payload (e.g. `{deleted: false}`).
    pub fn fail_with(code: ResultCode, message: impl Into<String>, data: T) -> Self {
        Self::failure(code, message.into(), Some(data))
    }

    fn failure(code: ResultCode, message: String, data: Option<T>) -> Self {
        let code = if code.is_success() { ResultCode::Error } else { code };
        let message = if message.trim().is_empty() {
            DEFAULT_FAILURE_MESSAGE.to_string()
        } else {
            message
        };
        Envelope {
            data,
            error: true,
            code,
            message,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (TRANSPORT_STATUS, Json(self)).into_response()
    }
}

/// One page of rows plus the figures a client needs to render paging controls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<T> {
    pub list: Vec<T>,
    pub total_cnt: u64,
    pub page_size: u32,
    pub page: u32,
    pub total_page: u64,
    pub is_first: bool,
    pub is_last: bool,
}

/// Build a [`ListPage`] from rows already fetched for `page`.
///
/// `page_size` is expected to be at least 1 (input validation rejects 0); a 0
/// is treated as 1 so the function stays total. Pages past the end are not
/// clamped: the rows are passed through as given and `is_last` is true.
pub fn paginate<T>(items: Vec<T>, total_cnt: u64, page: u32, page_size: u32) -> ListPage<T> {
    let divisor = u64::from(page_size.max(1));
    let total_page = total_cnt.div_ceil(divisor).max(1);
    ListPage {
        list: items,
        total_cnt,
        page_size,
        page,
        total_page,
        is_first: page <= 1,
        is_last: u64::from(page) >= total_page,
    }
}

/// Payload of every delete reply, success or not-found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    pub deleted: bool,
}
