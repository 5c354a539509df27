//! Generic cache-aside repository.
//!
//! One decorator serves every record type. The record supplies its cache tag,
//! so categories and products get separate key namespaces:
//!
//! - list key `{tag}` holds the whole collection
//! - item key `{tag}_{id}` holds one record

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use catalog_core::cache::{
    deserialize_record, deserialize_records, item_key, list_key, serialize_record,
    serialize_records, Cache, SerializationError,
};
use catalog_core::catalog::{Category, Product};
use catalog_core::storage::{Record, Repository, RepositoryError, Result, Store};

/// Cached repository decorator.
///
/// Implements the cache-aside pattern:
/// - **Reads**: Check cache first, on miss fetch from the store and populate cache
/// - **Writes**: Persist to the store, then delete the affected keys
///
/// Cache failures never fail an operation. They are logged and the store
/// answers instead.
///
/// # Type Parameters
///
/// * `T` - The record type
/// * `S` - The underlying store implementation
/// * `C` - The cache implementation
pub struct CachedRepository<T, S, C>
where
    T: Record,
    S: Store<T>,
    C: Cache,
{
    store: Arc<S>,
    cache: Arc<C>,
    ttl: Duration,
    _record: PhantomData<fn() -> T>,
}

/// Cached repository for categories.
pub type CategoryRepository<S, C> = CachedRepository<Category, S, C>;

/// Cached repository for products.
pub type ProductRepository<S, C> = CachedRepository<Product, S, C>;

impl<T, S, C> CachedRepository<T, S, C>
where
    T: Record,
    S: Store<T>,
    C: Cache,
{
    /// Creates a new cached repository.
    ///
    /// # Arguments
    ///
    /// * `store` - The underlying store to cache
    /// * `cache` - The cache implementation
    /// * `ttl` - Time-to-live for every value this repository caches
    pub fn new(store: Arc<S>, cache: Arc<C>, ttl: Duration) -> Self {
        Self {
            store,
            cache,
            ttl,
            _record: PhantomData,
        }
    }

    /// Reads a raw cached value. Errors and empty values count as a miss.
    async fn lookup(&self, key: &str) -> Option<String> {
        match self.cache.get(key).await {
            Ok(Some(value)) if !value.is_empty() => Some(value),
            Ok(_) => None,
            Err(err) => {
                tracing::warn!(%key, error = %err, "Cache read failed, falling back to store");
                None
            }
        }
    }

    async fn populate(&self, key: &str, encoded: std::result::Result<String, SerializationError>) {
        let value = match encoded {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(%key, error = %err, "Failed to encode value for cache");
                return;
            }
        };

        if let Err(err) = self.cache.set(key, &value, Some(self.ttl)).await {
            tracing::warn!(%key, error = %err, "Failed to populate cache");
        }
    }

    async fn invalidate(&self, key: &str) {
        if let Err(err) = self.cache.delete(key).await {
            tracing::warn!(%key, error = %err, "Failed to invalidate cache");
        }
    }

    /// Loads an existing record or fails with `NotFound`.
    async fn existing(&self, id: i64) -> Result<T> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::not_found::<T>(id))
    }
}

#[async_trait]
impl<T, S, C> Repository<T> for CachedRepository<T, S, C>
where
    T: Record,
    S: Store<T> + 'static,
    C: Cache + 'static,
{
    async fn list_all(&self) -> Result<Vec<T>> {
        let cache_key = list_key(T::CACHE_TAG);

        // Check cache first
        if let Some(value) = self.lookup(&cache_key).await {
            match deserialize_records::<T>(&value) {
                Ok(records) => {
                    tracing::trace!(
                        entity = T::ENTITY_TYPE,
                        count = records.len(),
                        "Cache hit for list"
                    );
                    return Ok(records);
                }
                // The store result below overwrites the bad value
                Err(err) => {
                    tracing::warn!(entity = T::ENTITY_TYPE, error = %err, "Cached list is corrupt");
                }
            }
        }

        // Cache miss - fetch from store
        tracing::trace!(entity = T::ENTITY_TYPE, "Cache miss for list");
        let records = self.store.list_all().await?;

        self.populate(&cache_key, serialize_records(&records)).await;

        Ok(records)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<T>> {
        let cache_key = item_key(T::CACHE_TAG, id);

        if let Some(value) = self.lookup(&cache_key).await {
            match deserialize_record::<T>(&value) {
                Ok(record) => {
                    tracing::trace!(entity = T::ENTITY_TYPE, id, "Cache hit");
                    return Ok(Some(record));
                }
                Err(err) => {
                    tracing::warn!(entity = T::ENTITY_TYPE, id, error = %err, "Cached record is corrupt");
                }
            }
        }

        tracing::trace!(entity = T::ENTITY_TYPE, id, "Cache miss");
        let record = self.store.find_by_id(id).await?;

        // Absent records are not cached
        if let Some(ref r) = record {
            self.populate(&cache_key, serialize_record(r)).await;
        }

        Ok(record)
    }

    async fn add(&self, record: T) -> Result<T> {
        let stored = self.store.add(&record).await?;

        self.invalidate(&list_key(T::CACHE_TAG)).await;

        tracing::debug!(entity = T::ENTITY_TYPE, id = stored.id(), "Record created");
        Ok(stored)
    }

    async fn update(&self, id: i64, changes: T) -> Result<()> {
        let mut record = self.existing(id).await?;
        record.apply_changes(changes);

        self.store.update(&record).await?;

        self.invalidate(&list_key(T::CACHE_TAG)).await;
        self.invalidate(&item_key(T::CACHE_TAG, id)).await;

        tracing::debug!(entity = T::ENTITY_TYPE, id, "Record updated");
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let record = self.existing(id).await?;

        self.store.remove(&record).await?;

        self.invalidate(&list_key(T::CACHE_TAG)).await;
        self.invalidate(&item_key(T::CACHE_TAG, id)).await;

        tracing::debug!(entity = T::ENTITY_TYPE, id, "Record deleted");
        Ok(())
    }
}
