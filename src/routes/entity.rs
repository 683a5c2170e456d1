//! Per-entity CRUD routes. Each entity kind gets its own router and service state,
//! nested at its catalogue path.

use crate::entity::Entity;
use crate::handlers::entity::{create, delete, list, read, update};
use crate::service::EntityService;
use axum::{routing::get, Router};

/// `GET|POST /` and `GET|PATCH|DELETE /:key` for one entity kind.
pub fn entity_routes<E: Entity>(svc: EntityService<E>) -> Router {
    Router::new()
        .route("/", get(list::<E>).post(create::<E>))
        .route("/:key", get(read::<E>).patch(update::<E>).delete(delete::<E>))
        .with_state(svc)
}
