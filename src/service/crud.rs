//! Generic entity service: paging defaults, not-found resolution and envelope construction
//! over any [`EntityAccess`].

use crate::entity::{Entity, EntityAccess, PageRequest};
use crate::error::AppError;
use crate::response::{paginate, Deleted, Envelope, ListPage};
use std::sync::Arc;

pub const DEFAULT_PAGE: u32 = 1;

pub struct EntityService<E: Entity> {
    access: Arc<dyn EntityAccess<E>>,
    default_page_size: u32,
}

impl<E: Entity> Clone for EntityService<E> {
    fn clone(&self) -> Self {
        EntityService {
            access: Arc::clone(&self.access),
            default_page_size: self.default_page_size,
        }
    }
}

impl<E: Entity> EntityService<E> {
    pub fn new(access: Arc<dyn EntityAccess<E>>, default_page_size: u32) -> Self {
        EntityService {
            access,
            default_page_size: default_page_size.max(1),
        }
    }

    /// Resolve paging (absent values take defaults), fetch and wrap in a [`ListPage`].
    pub async fn get_list(&self, filter: &E::Filter) -> Result<Envelope<ListPage<E>>, AppError> {
        let params = E::page_params(filter);
        let page = PageRequest {
            page: params.page.unwrap_or(DEFAULT_PAGE).max(1),
            page_size: params.page_size.unwrap_or(self.default_page_size).max(1),
        };
        let fetched = self.access.select_list(filter, page).await?;
        tracing::debug!(
            entity = E::DEF.name,
            page = page.page,
            page_size = page.page_size,
            total_cnt = fetched.total_cnt,
            "list"
        );
        Ok(Envelope::ok(paginate(
            fetched.rows,
            fetched.total_cnt,
            page.page,
            page.page_size,
        )))
    }

    /// `scope` is the owning project for scoped entities, `None` otherwise.
    pub async fn get_by_key(&self, key: i64, scope: Option<i64>) -> Result<Envelope<E>, AppError> {
        Ok(match self.access.select_by_key(key, scope).await? {
            Some(row) => Envelope::ok(row),
            None => Self::not_found(),
        })
    }

    pub async fn create(&self, draft: &E::Draft) -> Result<Envelope<E>, AppError> {
        let row = self.access.insert(draft).await?;
        tracing::info!(entity = E::DEF.name, "created");
        Ok(Envelope::created(row))
    }

    pub async fn update(
        &self,
        key: i64,
        scope: Option<i64>,
        patch: &E::Patch,
    ) -> Result<Envelope<E>, AppError> {
        Ok(match self.access.update(key, scope, patch).await? {
            Some(row) => {
                tracing::info!(entity = E::DEF.name, key, "updated");
                Envelope::ok(row)
            }
            None => Self::not_found(),
        })
    }

    /// Soft delete. A missing row is a failure that still reports `{deleted: false}`.
    pub async fn delete(&self, key: i64, scope: Option<i64>) -> Result<Envelope<Deleted>, AppError> {
        if self.access.delete(key, scope).await? {
            tracing::info!(entity = E::DEF.name, key, "deleted");
            Ok(Envelope::ok(Deleted { deleted: true }))
        } else {
            Ok(Envelope::fail_with(
                E::DEF.not_found,
                E::DEF.not_found_message,
                Deleted { deleted: false },
            ))
        }
    }

    fn not_found<T>() -> Envelope<T> {
        Envelope::fail(E::DEF.not_found, E::DEF.not_found_message)
    }
}
