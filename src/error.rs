//! Typed errors and their one-time conversion into failure envelopes.
//!
//! Expected outcomes (entity not found) never become errors; they are resolved
//! inside the entity service. Everything here is either an input-shape fault or
//! a storage/programming fault that escapes to the outermost boundary.

use crate::code::ResultCode;
use crate::config::StorageMode;
use crate::response::Envelope;
use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Startup-fatal configuration and storage selection faults.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown storage mode '{0}' (expected embedded or networked)")]
    UnknownMode(String),
    #[error("networked storage selected but no connection url is configured")]
    MissingConnectionUrl,
    #[error("embedded storage selected but no database path is configured")]
    MissingDatabasePath,
    #[error("config load: {0}")]
    Load(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("{mode} storage unreachable: {source}")]
    Unreachable {
        mode: StorageMode,
        #[source]
        source: sqlx::Error,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    /// Fault raised by the HTTP layer itself, classified by its conventional status.
    #[error("{message}")]
    Http { status: StatusCode, message: String },
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("row decode: {0}")]
    Decode(String),
    #[error("internal: {0}")]
    Internal(String),
}

const INTERNAL_MESSAGE: &str = "internal server error";
const UNAVAILABLE_MESSAGE: &str = "storage is unavailable";

impl AppError {
    pub fn code(&self) -> ResultCode {
        match self {
            AppError::Validation(_) => ResultCode::ValidationError,
            AppError::BadRequest(_) => ResultCode::BadRequest,
            AppError::Http { status, .. } => ResultCode::from_status(*status),
            AppError::Db(e) if is_connectivity(e) => ResultCode::ServiceUnavailable,
            AppError::Db(_) | AppError::Decode(_) | AppError::Internal(_) => ResultCode::InternalServerError,
        }
    }

    /// Message safe to show a caller. Server-side faults never leak detail.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(m) | AppError::BadRequest(m) => m.clone(),
            AppError::Http { message, .. } => message.clone(),
            AppError::Db(e) if is_connectivity(e) => UNAVAILABLE_MESSAGE.to_string(),
            AppError::Db(_) | AppError::Decode(_) | AppError::Internal(_) => {
                INTERNAL_MESSAGE.to_string()
            }
        }
    }

    fn is_server_fault(&self) -> bool {
        matches!(self, AppError::Db(_) | AppError::Decode(_) | AppError::Internal(_))
    }
}

fn is_connectivity(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        if self.is_server_fault() {
            tracing::error!(code = %code, error = ?self, "request failed");
        } else {
            tracing::warn!(code = %code, error = %self, "request rejected");
        }
        Envelope::<()>::fail(code, self.public_message()).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Http {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
