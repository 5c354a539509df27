//! In-memory store implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use catalog_core::catalog::{Category, Product};
use catalog_core::storage::{Record, RepositoryError, Result, Store};

/// Rows of one record type plus its id sequence.
#[derive(Debug)]
pub struct Table<T> {
    rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

pub type SharedTable<T> = Arc<RwLock<Table<T>>>;

/// Selects the table holding records of type `T`.
pub trait HasTable<T> {
    fn table(&self) -> &SharedTable<T>;
}

/// In-memory storage backend.
///
/// Ids are assigned from a per-table sequence starting at 1 and are never
/// reused. Data is not persisted and will be lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    categories: SharedTable<Category>,
    products: SharedTable<Product>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HasTable<Category> for InMemoryStore {
    fn table(&self) -> &SharedTable<Category> {
        &self.categories
    }
}

impl HasTable<Product> for InMemoryStore {
    fn table(&self) -> &SharedTable<Product> {
        &self.products
    }
}

#[async_trait]
impl<T> Store<T> for InMemoryStore
where
    T: Record,
    InMemoryStore: HasTable<T>,
{
    async fn find_by_id(&self, id: i64) -> Result<Option<T>> {
        let table = self.table().read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<T>> {
        let table = self.table().read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn add(&self, record: &T) -> Result<T> {
        let mut table = self.table().write().await;
        table.last_id += 1;

        let mut stored = record.clone();
        stored.assign_id(table.last_id);
        table.rows.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn update(&self, record: &T) -> Result<()> {
        let mut table = self.table().write().await;
        match table.rows.get_mut(&record.id()) {
            Some(row) => {
                *row = record.clone();
                Ok(())
            }
            None => Err(RepositoryError::not_found::<T>(record.id())),
        }
    }

    async fn remove(&self, record: &T) -> Result<()> {
        let mut table = self.table().write().await;
        if table.rows.remove(&record.id()).is_none() {
            return Err(RepositoryError::not_found::<T>(record.id()));
        }
        Ok(())
    }
}
