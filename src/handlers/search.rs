//! Combined pool search: `GET /search/traits`, `GET /search/abilities`.

use crate::entity::{PoolEntry, PoolMember, PoolQuery};
use crate::error::AppError;
use crate::extractors::{QueryParams, SessionId};
use crate::response::{Envelope, ListPage};
use crate::service::PoolSearch;
use axum::extract::State;

#[tracing::instrument(skip_all, fields(entity = G::DEF.name, session = %session))]
pub async fn search_pool<G: PoolMember, P: PoolMember>(
    State(svc): State<PoolSearch<G, P>>,
    session: SessionId,
    QueryParams(query): QueryParams<PoolQuery>,
) -> Result<Envelope<ListPage<PoolEntry<G, P>>>, AppError> {
    let prj_no = query.validate()?;
    svc.search(prj_no, &query).await
}
