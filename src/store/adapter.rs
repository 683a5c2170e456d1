//! Shared [`EntityAccess`](crate::entity::EntityAccess) implementation for both pools.
//!
//! The adapters differ only in pool and argument types, so each backend module
//! defines its own `bind_all` and expands this macro next to it.

macro_rules! entity_access {
    ($(#[$meta:meta])* $name:ident, $pool:ty, $dialect:expr) => {
        $(#[$meta])*
        pub struct $name<E> {
            pool: $pool,
            _entity: ::std::marker::PhantomData<fn() -> E>,
        }

        impl<E> $name<E> {
            pub fn new(pool: $pool) -> Self {
                $name {
                    pool,
                    _entity: ::std::marker::PhantomData,
                }
            }
        }

        #[::async_trait::async_trait]
        impl<E: $crate::entity::Entity> $crate::entity::EntityAccess<E> for $name<E> {
            async fn select_list(
                &self,
                filter: &E::Filter,
                page: $crate::entity::PageRequest,
            ) -> Result<$crate::entity::Fetched<E>, $crate::error::AppError> {
                let predicates = E::predicates(filter);
                let cq = $crate::sql::count($dialect, &E::DEF, &predicates);
                let total_cnt =
                    $crate::store::decode::count_of(&bind_all(&cq).fetch_one(&self.pool).await?)?;
                let pq = $crate::sql::select_page($dialect, &E::DEF, &predicates, page);
                let rows = bind_all(&pq)
                    .fetch_all(&self.pool)
                    .await?
                    .iter()
                    .map($crate::store::decode::row_to_entity::<E, _>)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok($crate::entity::Fetched { rows, total_cnt })
            }

            async fn select_by_key(
                &self,
                key: i64,
                scope: Option<i64>,
            ) -> Result<Option<E>, $crate::error::AppError> {
                let q = $crate::sql::select_by_key($dialect, &E::DEF, key, scope);
                let row = bind_all(&q).fetch_optional(&self.pool).await?;
                row.as_ref()
                    .map($crate::store::decode::row_to_entity::<E, _>)
                    .transpose()
            }

            async fn insert(&self, draft: &E::Draft) -> Result<E, $crate::error::AppError> {
                let values = $crate::sql::draft_values(&E::DEF, draft)?;
                let q = $crate::sql::insert($dialect, &E::DEF, &values, ::chrono::Utc::now());
                let row = bind_all(&q).fetch_one(&self.pool).await?;
                $crate::store::decode::row_to_entity(&row)
            }

            async fn update(
                &self,
                key: i64,
                scope: Option<i64>,
                patch: &E::Patch,
            ) -> Result<Option<E>, $crate::error::AppError> {
                let values = $crate::sql::patch_values(&E::DEF, patch)?;
                let q = $crate::sql::update($dialect, &E::DEF, key, scope, &values, ::chrono::Utc::now());
                let row = bind_all(&q).fetch_optional(&self.pool).await?;
                row.as_ref()
                    .map($crate::store::decode::row_to_entity::<E, _>)
                    .transpose()
            }

            async fn delete(&self, key: i64, scope: Option<i64>) -> Result<bool, $crate::error::AppError> {
                let q = $crate::sql::soft_delete($dialect, &E::DEF, key, scope, ::chrono::Utc::now());
                let done = bind_all(&q).execute(&self.pool).await?;
                Ok(done.rows_affected() > 0)
            }
        }
    };
}
