//! Entity handlers, generic over the entity kind: list, create, read, update, delete.
//!
//! Input validation runs here; everything past it is the service's job.
//! Key routes of scoped entities also take `prjNo` from the query string.

use crate::entity::{Entity, KeyScope};
use crate::error::AppError;
use crate::extractors::{JsonBody, KeyPath, QueryParams, SessionId};
use crate::response::{Deleted, Envelope, ListPage};
use crate::service::EntityService;
use axum::extract::State;

#[tracing::instrument(skip_all, fields(entity = E::DEF.name, session = %session))]
pub async fn list<E: Entity>(
    State(svc): State<EntityService<E>>,
    session: SessionId,
    QueryParams(filter): QueryParams<E::Filter>,
) -> Result<Envelope<ListPage<E>>, AppError> {
    E::validate_filter(&filter)?;
    svc.get_list(&filter).await
}

#[tracing::instrument(skip_all, fields(entity = E::DEF.name, session = %session))]
pub async fn create<E: Entity>(
    State(svc): State<EntityService<E>>,
    session: SessionId,
    JsonBody(draft): JsonBody<E::Draft>,
) -> Result<Envelope<E>, AppError> {
    E::validate_draft(&draft)?;
    svc.create(&draft).await
}

#[tracing::instrument(skip_all, fields(entity = E::DEF.name, session = %session, key = key.0))]
pub async fn read<E: Entity>(
    State(svc): State<EntityService<E>>,
    session: SessionId,
    key: KeyPath,
    QueryParams(scope): QueryParams<KeyScope>,
) -> Result<Envelope<E>, AppError> {
    let scope = scope.resolve(E::DEF.scope)?;
    svc.get_by_key(key.0, scope).await
}

#[tracing::instrument(skip_all, fields(entity = E::DEF.name, session = %session, key = key.0))]
pub async fn update<E: Entity>(
    State(svc): State<EntityService<E>>,
    session: SessionId,
    key: KeyPath,
    QueryParams(scope): QueryParams<KeyScope>,
    JsonBody(patch): JsonBody<E::Patch>,
) -> Result<Envelope<E>, AppError> {
    let scope = scope.resolve(E::DEF.scope)?;
    E::validate_patch(&patch)?;
    svc.update(key.0, scope, &patch).await
}

#[tracing::instrument(skip_all, fields(entity = E::DEF.name, session = %session, key = key.0))]
pub async fn delete<E: Entity>(
    State(svc): State<EntityService<E>>,
    session: SessionId,
    key: KeyPath,
    QueryParams(scope): QueryParams<KeyScope>,
) -> Result<Envelope<Deleted>, AppError> {
    let scope = scope.resolve(E::DEF.scope)?;
    svc.delete(key.0, scope).await
}
