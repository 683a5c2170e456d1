//! The data-access contract every storage adapter implements for every entity.

use crate::entity::Entity;
use crate::error::AppError;
use async_trait::async_trait;

/// A resolved page: both values are at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }
}

/// Rows of one page plus the total count matching the same filter.
#[derive(Clone, Debug, PartialEq)]
pub struct Fetched<R> {
    pub rows: Vec<R>,
    pub total_cnt: u64,
}

/// List / get / insert / update / delete over one entity kind.
///
/// A key with no live row yields `None` (or `false` for delete), never an
/// error. `Err` is reserved for storage faults. For scoped entities `scope`
/// is the project the row must belong to; other entities ignore it.
#[async_trait]
pub trait EntityAccess<E: Entity>: Send + Sync {
    /// Rows matching the filter for one page, ordered by key descending.
    async fn select_list(&self, filter: &E::Filter, page: PageRequest) -> Result<Fetched<E>, AppError>;

    async fn select_by_key(&self, key: i64, scope: Option<i64>) -> Result<Option<E>, AppError>;

    /// Returns the row as stored, including its generated key.
    async fn insert(&self, draft: &E::Draft) -> Result<E, AppError>;

    /// Writes only the fields present in `patch`.
    async fn update(&self, key: i64, scope: Option<i64>, patch: &E::Patch) -> Result<Option<E>, AppError>;

    /// True iff a live row existed and was removed.
    async fn delete(&self, key: i64, scope: Option<i64>) -> Result<bool, AppError>;
}
