//! Session-wide cache of the category tree.
//!
//! The tree is fetched once and shared; after the staleness window (or an
//! explicit `invalidate`) the next read refetches the whole tree. There is
//! no partial refresh.

use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::backend::{Backend, ListQuery};
use crate::error::AppResult;
use crate::models::Category;

pub const STALE_AFTER: Duration = Duration::from_secs(5 * 60);

#[derive(Debug)]
struct CachedTree {
    categories: Vec<Category>,
    fetched_at: Instant,
}

#[derive(Debug)]
pub struct CatalogCache {
    ttl: Duration,
    inner: Mutex<Option<CachedTree>>,
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::with_ttl(STALE_AFTER)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: Mutex::new(None),
        }
    }

    /// Return the cached tree, refetching it first when absent or stale.
    pub async fn get(&self, backend: &Backend) -> AppResult<Vec<Category>> {
        let mut guard = self.inner.lock().await;
        if let Some(cached) = guard.as_ref() {
            if cached.fetched_at.elapsed() < self.ttl {
                return Ok(cached.categories.clone());
            }
        }
        tracing::debug!("refetching category tree");
        let categories: Vec<Category> = backend.fetch_all("categories", &ListQuery::new()).await?;
        *guard = Some(CachedTree {
            categories: categories.clone(),
            fetched_at: Instant::now(),
        });
        Ok(categories)
    }

    /// Current cached tree without triggering a fetch; `None` when empty or
    /// stale.
    pub async fn cached(&self) -> Option<Vec<Category>> {
        let guard = self.inner.lock().await;
        guard
            .as_ref()
            .filter(|cached| cached.fetched_at.elapsed() < self.ttl)
            .map(|cached| cached.categories.clone())
    }

    /// Drop the cached tree so the next read refetches. Mutation success
    /// callbacks call this instead of relying on implicit refetch-on-close.
    pub async fn invalidate(&self) {
        let mut guard = self.inner.lock().await;
        *guard = None;
    }
}
