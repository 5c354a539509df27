//! In-memory cache implementation with LRU eviction.
//!
//! Provides a thread-safe in-memory cache with TTL support using
//! tokio synchronization primitives and LRU eviction policy.
//!
//! Expiry is measured with `tokio::time::Instant`, so a paused tokio clock
//! controls it in tests.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;
use tokio::time::Instant;

use catalog_core::cache::{Cache, Result};

/// A single cache entry with optional expiration.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    /// A TTL too large to represent as an instant never expires.
    fn new(value: String, ttl: Option<Duration>) -> Self {
        let expires_at = ttl.and_then(|d| Instant::now().checked_add(d));
        Self { value, expires_at }
    }

    /// An entry is unreadable from the instant its TTL has fully elapsed.
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Instant::now() >= exp)
    }
}

/// In-memory cache implementation with LRU eviction.
///
/// Thread-safe cache using `Arc<RwLock<LruCache>>` for concurrent access.
/// Expired entries are dropped lazily, when a read finds them.
/// Uses LRU eviction to limit memory usage when max_entries is reached.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
}

impl MemoryCache {
    /// Creates a new in-memory cache with LRU eviction.
    ///
    /// # Arguments
    ///
    /// * `max_entries` - Maximum number of entries before LRU eviction kicks in.
    ///
    /// # Panics
    ///
    /// Panics if `max_entries` is 0.
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).expect("max_entries must be > 0");
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        // LRU reads reorder entries, so even a lookup needs the write lock.
        let mut store = self.store.write().await;

        match store.get(key) {
            Some(entry) if !entry.is_expired() => return Ok(Some(entry.value.clone())),
            Some(_) => {}
            None => return Ok(None),
        }

        store.pop(key);
        Ok(None)
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()> {
        let mut store = self.store.write().await;
        store.put(key.to_string(), CacheEntry::new(value.to_string(), ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut store = self.store.write().await;
        store.pop(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Default max entries for tests
    const TEST_MAX_ENTRIES: usize = 1000;

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);

        cache.set("CategoryList_1", "value", None).await.unwrap();
        let result = cache.get("CategoryList_1").await.unwrap();

        assert_eq!(result, Some("value".to_string()));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);
        let result = cache.get("CategoryList_404").await.unwrap();

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_delete() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);

        cache.set("ProductList", "[]", None).await.unwrap();
        assert!(cache.get("ProductList").await.unwrap().is_some());

        cache.delete("ProductList").await.unwrap();
        assert!(cache.get("ProductList").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_key_is_ok() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);
        assert!(cache.delete("ProductList_9").await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ttl_expiration() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);
        let ttl = Duration::from_secs(600);

        cache.set("CategoryList", "[]", Some(ttl)).await.unwrap();

        tokio::time::advance(Duration::from_secs(599)).await;
        assert!(cache.get("CategoryList").await.unwrap().is_some());

        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(cache.get("CategoryList").await.unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entry_is_dropped_on_read() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);

        cache
            .set("CategoryList_1", "value", Some(Duration::from_secs(1)))
            .await
            .unwrap();
        tokio::time::advance(Duration::from_secs(2)).await;

        assert!(cache.get("CategoryList_1").await.unwrap().is_none());
        assert!(cache.store.read().await.peek("CategoryList_1").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_resets_ttl() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);
        let ttl = Duration::from_secs(10);

        cache.set("ProductList", "first", Some(ttl)).await.unwrap();
        tokio::time::advance(Duration::from_secs(8)).await;
        cache.set("ProductList", "second", Some(ttl)).await.unwrap();
        tokio::time::advance(Duration::from_secs(8)).await;

        assert_eq!(
            cache.get("ProductList").await.unwrap(),
            Some("second".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_unrepresentable_ttl_never_expires() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);

        cache
            .set("CategoryList_1", "value", Some(Duration::from_secs(u64::MAX)))
            .await
            .unwrap();

        tokio::time::advance(Duration::from_secs(60 * 60 * 24 * 365)).await;
        assert_eq!(
            cache.get("CategoryList_1").await.unwrap(),
            Some("value".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_ttl_never_expires() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);

        cache.set("ProductList", "persistent", None).await.unwrap();

        tokio::time::advance(Duration::from_secs(60 * 60 * 24)).await;
        assert!(cache.get("ProductList").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_overwrite_value() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);

        cache.set("ProductList_1", "first", None).await.unwrap();
        cache.set("ProductList_1", "second", None).await.unwrap();

        let result = cache.get("ProductList_1").await.unwrap();
        assert_eq!(result, Some("second".to_string()));
    }

    #[tokio::test]
    async fn test_lru_eviction() {
        // Create a cache with only 3 entries max
        let cache = MemoryCache::new(3);

        cache.set("key1", "value1", None).await.unwrap();
        cache.set("key2", "value2", None).await.unwrap();
        cache.set("key3", "value3", None).await.unwrap();

        // Access key1 to make it recently used
        cache.get("key1").await.unwrap();

        // Insert a 4th entry - should evict key2 (least recently used)
        cache.set("key4", "value4", None).await.unwrap();

        assert!(cache.get("key1").await.unwrap().is_some());
        assert!(cache.get("key2").await.unwrap().is_none());
        assert!(cache.get("key3").await.unwrap().is_some());
        assert!(cache.get("key4").await.unwrap().is_some());
    }

    #[tokio::test]
    #[should_panic(expected = "max_entries must be > 0")]
    async fn test_zero_max_entries_panics() {
        let _ = MemoryCache::new(0);
    }
}
