//! Router assembly: entity routers, service routes and the layers every reply passes through.
//!
//! Every reply leaves with transport status 200; the outcome lives in the envelope.

mod common;
mod entity;
mod search;

pub use common::common_routes;
pub use entity::entity_routes;
pub use search::search_routes;

use crate::code::ResultCode;
use crate::entity::{
    Ability, Character, CoreRule, Creature, Entity, Event, Item, Lore, Nation, Organization,
    PoolMember, Project, ProjectAbility, ProjectTrait, Region, Trait,
};
use crate::response::{Envelope, TRANSPORT_STATUS};
use crate::service::{EntityService, PoolSearch};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, Method},
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
};

fn nest_entity<E: Entity>(router: Router, state: &AppState) -> Router {
    let svc = EntityService::<E>::new(state.storage.access::<E>(), state.config.pagination.page_size);
    router.nest(E::DEF.path, entity_routes(svc))
}

fn pool_search<G: PoolMember, P: PoolMember>(state: &AppState) -> PoolSearch<G, P> {
    PoolSearch::new(
        state.storage.access::<G>(),
        state.storage.access::<P>(),
        state.config.pagination.page_size,
    )
}

/// Full application router. Services are built once here and shared by every request.
pub fn app_router(state: AppState) -> Router {
    let mut router = common_routes(state.clone());
    router = nest_entity::<Project>(router, &state);
    router = nest_entity::<Trait>(router, &state);
    router = nest_entity::<Ability>(router, &state);
    router = nest_entity::<ProjectTrait>(router, &state);
    router = nest_entity::<ProjectAbility>(router, &state);
    router = nest_entity::<CoreRule>(router, &state);
    router = nest_entity::<Creature>(router, &state);
    router = nest_entity::<Character>(router, &state);
    router = nest_entity::<Item>(router, &state);
    router = nest_entity::<Region>(router, &state);
    router = nest_entity::<Nation>(router, &state);
    router = nest_entity::<Organization>(router, &state);
    router = nest_entity::<Event>(router, &state);
    router = nest_entity::<Lore>(router, &state);
    router = router.nest(
        "/search",
        search_routes(pool_search(&state), pool_search(&state)),
    );

    let body_limit = state.config.server.body_limit_bytes;
    router
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        // Json's own 2 MiB default would otherwise cap the configured limit.
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(middleware::map_response(neutral_status))
        .layer(cors())
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-session-id"),
        ])
}

async fn route_not_found() -> Envelope<()> {
    Envelope::fail(ResultCode::NotFound, "route not found")
}

/// Replies produced below the handlers (405, 413, ...) carry a bare status.
/// Rewrite them as failure envelopes at 200.
async fn neutral_status(response: Response) -> Response {
    let status = response.status();
    if status == TRANSPORT_STATUS {
        return response;
    }
    if status.is_success() {
        let mut response = response;
        *response.status_mut() = TRANSPORT_STATUS;
        return response;
    }
    let message = status.canonical_reason().unwrap_or("request failed").to_lowercase();
    tracing::warn!(status = %status, "request rejected before reaching a handler");
    Envelope::<()>::fail(ResultCode::from_status(status), message).into_response()
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = %detail, "handler panicked");
    Envelope::<()>::fail(ResultCode::InternalServerError, "internal server error").into_response()
}
