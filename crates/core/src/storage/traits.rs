use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use super::Result;

/// A storable entity with a store-assigned integer identity.
///
/// The associated constants give each record type its own error label and
/// its own cache key namespace.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Human readable entity name used in errors and logs.
    const ENTITY_TYPE: &'static str;
    /// Base tag of the record's cache keys.
    const CACHE_TAG: &'static str;

    /// Returns the record's identity.
    fn id(&self) -> i64;

    /// Overwrites the record's identity.
    fn assign_id(&mut self, id: i64);

    /// Copies every mutable field of `changes` onto `self`, leaving the id untouched.
    fn apply_changes(&mut self, changes: Self);
}

/// Persistence for one record type.
///
/// Every call is a single committed unit of work.
#[async_trait]
pub trait Store<T: Record>: Send + Sync {
    /// Gets a record by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<T>>;

    /// Gets every record, ordered by ascending ID.
    async fn list_all(&self) -> Result<Vec<T>>;

    /// Inserts a record and returns it with the store-assigned ID.
    async fn add(&self, record: &T) -> Result<T>;

    /// Persists the mutable fields of an existing record.
    async fn update(&self, record: &T) -> Result<()>;

    /// Removes an existing record.
    async fn remove(&self, record: &T) -> Result<()>;
}

/// CRUD interface consumed by the API layer.
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// Gets every record.
    async fn list_all(&self) -> Result<Vec<T>>;

    /// Gets a record by its ID, `None` when it does not exist.
    async fn get_by_id(&self, id: i64) -> Result<Option<T>>;

    /// Creates a record. Any ID on the input is ignored.
    async fn add(&self, record: T) -> Result<T>;

    /// Replaces the mutable fields of an existing record.
    ///
    /// Returns `RepositoryError::NotFound` when no record has this ID.
    async fn update(&self, id: i64, changes: T) -> Result<()>;

    /// Deletes a record.
    ///
    /// Returns `RepositoryError::NotFound` when no record has this ID.
    async fn delete(&self, id: i64) -> Result<()>;
}
