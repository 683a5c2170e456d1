//! Request extractors whose rejections are [`AppError`](crate::error::AppError)s, so every
//! malformed request still answers with an envelope.

mod input;
mod session;

pub use input::{JsonBody, KeyPath, QueryParams};
pub use session::{SessionId, SESSION_ID_HEADER};
