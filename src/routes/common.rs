//! Service-level routes: GET /, GET /health, GET /ready.

use crate::handlers::common::{health, home, ready};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state)
}
