//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It holds repository trait objects and supports
//! different backend combinations via feature flags.

use std::sync::Arc;

use catalog_core::cache::Cache;
use catalog_core::catalog::{Category, Product};
use catalog_core::storage::{Repository, Store};

use crate::config::Config;
use crate::storage::cached::{CategoryRepository, ProductRepository};

/// Shared application state.
///
/// This is cloned for each request handler. Both repositories are cached and
/// share one store and one cache.
#[derive(Clone)]
pub struct AppState {
    /// Category repository (cached, wraps underlying storage).
    pub categories: Arc<dyn Repository<Category>>,
    /// Product repository (cached, wraps underlying storage).
    pub products: Arc<dyn Repository<Product>>,
}

impl AppState {
    /// Wires both cached repositories over the given store and cache.
    fn build<S, C>(store: Arc<S>, cache: Arc<C>, config: &Config) -> Self
    where
        S: Store<Category> + Store<Product> + 'static,
        C: Cache + 'static,
    {
        let categories: Arc<CategoryRepository<S, C>> = Arc::new(CategoryRepository::new(
            store.clone(),
            cache.clone(),
            config.cache_ttl(),
        ));
        let products: Arc<ProductRepository<S, C>> =
            Arc::new(ProductRepository::new(store, cache, config.cache_ttl()));

        Self {
            categories,
            products,
        }
    }
}

// ============================================================================
// Factory functions for different backend combinations
// ============================================================================

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::SqliteStore;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(SqliteStore::new(&config.sqlite_path).await?);
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            tracing::info!(path = %config.sqlite_path, "Using SQLite storage with in-memory cache");
            Ok(Self::build(store, cache, config))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::SqliteStore;

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(SqliteStore::new(&config.sqlite_path).await?);
            let cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            tracing::info!(path = %config.sqlite_path, "Using SQLite storage with Redis cache");
            Ok(Self::build(store, cache, config))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::InMemoryStore;

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Useful for testing without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(InMemoryStore::new());
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            tracing::info!("Using in-memory storage with in-memory cache");
            Ok(Self::build(store, cache, config))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::InMemoryStore;

    impl AppState {
        /// Creates AppState with in-memory storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(InMemoryStore::new());
            let cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            tracing::info!("Using in-memory storage with Redis cache");
            Ok(Self::build(store, cache, config))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
