//! Body, query and path extractors mapped onto the envelope's result codes.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

/// JSON body. Syntax faults become BAD_REQUEST, shape faults VALIDATION_ERROR,
/// a missing JSON content type UNSUPPORTED_MEDIA_TYPE.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}

/// Query string. Any parse fault (e.g. `page=abc`) is BAD_REQUEST.
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(QueryParams(value))
    }
}

/// Integer entity key from the last path segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPath(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for KeyPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        raw.trim()
            .parse::<i64>()
            .map(KeyPath)
            .map_err(|_| AppError::BadRequest(format!("invalid key '{}': expected an integer", raw)))
    }
}
