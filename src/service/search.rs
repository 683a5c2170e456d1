//! Search across a global pool and one project's pool, merged into a single page.

use crate::entity::{EntityAccess, PageRequest, PoolEntry, PoolMember, PoolQuery};
use crate::error::AppError;
use crate::response::{paginate, Envelope, ListPage};
use crate::service::DEFAULT_PAGE;
use crate::sql::fold;
use std::sync::Arc;

/// Both sides are read in full, then merged, sorted by name and paged here.
const WHOLE_POOL: PageRequest = PageRequest { page: 1, page_size: u32::MAX };

pub struct PoolSearch<G: PoolMember, P: PoolMember> {
    global: Arc<dyn EntityAccess<G>>,
    project: Arc<dyn EntityAccess<P>>,
    default_page_size: u32,
}

impl<G: PoolMember, P: PoolMember> Clone for PoolSearch<G, P> {
    fn clone(&self) -> Self {
        PoolSearch {
            global: Arc::clone(&self.global),
            project: Arc::clone(&self.project),
            default_page_size: self.default_page_size,
        }
    }
}

impl<G: PoolMember, P: PoolMember> PoolSearch<G, P> {
    pub fn new(
        global: Arc<dyn EntityAccess<G>>,
        project: Arc<dyn EntityAccess<P>>,
        default_page_size: u32,
    ) -> Self {
        PoolSearch {
            global,
            project,
            default_page_size: default_page_size.max(1),
        }
    }

    pub async fn search(
        &self,
        prj_no: i64,
        query: &PoolQuery,
    ) -> Result<Envelope<ListPage<PoolEntry<G, P>>>, AppError> {
        let mut merged = Vec::new();
        if query.pool.includes_global() {
            let fetched = self.global.select_list(&query.filter(None), WHOLE_POOL).await?;
            merged.extend(fetched.rows.into_iter().map(PoolEntry::Global));
        }
        if query.pool.includes_project() {
            let fetched = self
                .project
                .select_list(&query.filter(Some(prj_no)), WHOLE_POOL)
                .await?;
            merged.extend(fetched.rows.into_iter().map(PoolEntry::Project));
        }
        merged.sort_by_cached_key(|entry| fold(entry.sort_name()));

        let params = query.page_params();
        let page = params.page.unwrap_or(DEFAULT_PAGE).max(1);
        let page_size = params.page_size.unwrap_or(self.default_page_size).max(1);
        let total_cnt = merged.len() as u64;
        let offset = PageRequest { page, page_size }.offset();
        let rows = merged
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(page_size as usize)
            .collect();
        tracing::debug!(
            entity = G::DEF.name,
            pool = ?query.pool,
            prj_no,
            total_cnt,
            "pool search"
        );
        Ok(Envelope::ok(paginate(rows, total_cnt, page, page_size)))
    }
}
