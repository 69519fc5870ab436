use crate::core::stores::{SportCatalog, StoreError};
use crate::models::Sport;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

const CATALOG_KEY: &str = "sports:all";

/// Read-through cache over the sport catalog.
///
/// The catalog is small, immutable reference data; a single in-process
/// moka entry with a TTL keeps discovery from re-reading it per request.
/// The core never mutates it.
pub struct CachedSportCatalog {
    inner: Arc<dyn SportCatalog>,
    cache: moka::future::Cache<&'static str, Arc<Vec<Sport>>>,
}

impl CachedSportCatalog {
    pub fn new(inner: Arc<dyn SportCatalog>, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(4)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { inner, cache }
    }

    /// Drop the cached catalog so the next read hits the store.
    pub async fn invalidate(&self) {
        self.cache.invalidate(CATALOG_KEY).await;
    }
}

#[async_trait]
impl SportCatalog for CachedSportCatalog {
    async fn all_sports(&self) -> Result<Vec<Sport>, StoreError> {
        let inner = self.inner.clone();
        let sports = self
            .cache
            .try_get_with(CATALOG_KEY, async move {
                tracing::debug!("Sport catalog cache miss, loading from store");
                inner.all_sports().await.map(Arc::new)
            })
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(sports.as_ref().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingCatalog {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SportCatalog for CountingCatalog {
        async fn all_sports(&self) -> Result<Vec<Sport>, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![
                Sport {
                    id: 1,
                    name: "Tennis".to_string(),
                },
                Sport {
                    id: 2,
                    name: "Running".to_string(),
                },
            ])
        }
    }

    #[tokio::test]
    async fn test_second_read_is_served_from_cache() {
        let counting = Arc::new(CountingCatalog {
            calls: AtomicUsize::new(0),
        });
        let catalog = CachedSportCatalog::new(counting.clone(), 300);

        let first = catalog.all_sports().await.unwrap();
        let second = catalog.all_sports().await.unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);
        assert_eq!(counting.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalidate_forces_reload() {
        let counting = Arc::new(CountingCatalog {
            calls: AtomicUsize::new(0),
        });
        let catalog = CachedSportCatalog::new(counting.clone(), 300);

        catalog.all_sports().await.unwrap();
        catalog.invalidate().await;
        catalog.all_sports().await.unwrap();

        assert_eq!(counting.calls.load(Ordering::SeqCst), 2);
    }
}
