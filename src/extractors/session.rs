//! Caller session id for log correlation. It never gates access.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use std::convert::Infallible;
use std::fmt;

pub const SESSION_ID_HEADER: &str = "X-Session-Id";

/// Placeholder logged for requests without a session id.
const NO_SESSION: &str = "-";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionId(pub Option<String>);

impl SessionId {
    fn from_headers(headers: &HeaderMap) -> Self {
        let value = headers
            .get(SESSION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        SessionId(value)
    }

    /// The id as it appears in log fields; `-` when the caller sent none.
    pub fn log_value(&self) -> &str {
        self.0.as_deref().unwrap_or(NO_SESSION)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.log_value())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(SessionId::from_headers(&parts.headers))
    }
}
