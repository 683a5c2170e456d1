//! Service-level handlers: identity, liveness, readiness.

use crate::error::AppError;
use crate::response::Envelope;
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HomeBody {
    pub name: &'static str,
    pub version: &'static str,
    pub storage: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    /// Epoch milliseconds.
    pub timestamp: i64,
}

#[derive(Debug, Serialize)]
pub struct ReadyBody {
    pub status: &'static str,
    pub storage: &'static str,
}

pub async fn home(State(state): State<AppState>) -> Envelope<HomeBody> {
    Envelope::ok(HomeBody {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        storage: state.storage.mode().as_str(),
    })
}

pub async fn health() -> Envelope<HealthBody> {
    Envelope::ok(HealthBody {
        status: "healthy",
        timestamp: chrono::Utc::now().timestamp_millis(),
    })
}

/// Ready once storage answers; a failed ping maps to SERVICE_UNAVAILABLE.
pub async fn ready(State(state): State<AppState>) -> Result<Envelope<ReadyBody>, AppError> {
    if let Err(e) = state.storage.ping().await {
        tracing::warn!(error = %e, "readiness check failed");
        return Err(AppError::Http {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: "storage is unavailable".into(),
        });
    }
    Ok(Envelope::ok(ReadyBody {
        status: "ok",
        storage: state.storage.mode().as_str(),
    }))
}
