//! Pool search routes, nested at `/search`.

use crate::entity::{Ability, ProjectAbility, ProjectTrait, Trait};
use crate::handlers::search::search_pool;
use crate::service::PoolSearch;
use axum::{routing::get, Router};

pub fn search_routes(
    traits: PoolSearch<Trait, ProjectTrait>,
    abilities: PoolSearch<Ability, ProjectAbility>,
) -> Router {
    let traits = Router::new()
        .route("/traits", get(search_pool::<Trait, ProjectTrait>))
        .with_state(traits);
    let abilities = Router::new()
        .route("/abilities", get(search_pool::<Ability, ProjectAbility>))
        .with_state(abilities);
    traits.merge(abilities)
}
