//! SQLite store implementation.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use catalog_core::catalog::{Category, Product};
use catalog_core::storage::{Record, RepositoryError, Result, Store};

use super::conversions::{format_price, row_to_category, row_to_product};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Turns a zero-row UPDATE or DELETE into a no-rows error.
fn expect_affected(rows: usize) -> tokio_rusqlite::Result<()> {
    if rows == 0 {
        Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
    } else {
        Ok(())
    }
}

/// SQLite-based store.
///
/// All statements run on the single connection owned by `tokio-rusqlite`,
/// so each call is its own committed unit of work.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Creates a new store with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new store with an in-memory database.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl Store<Category> for SqliteStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_CATEGORY_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id], row_to_category) {
                    Ok(category) => Ok(Some(category)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Category::ENTITY_TYPE, id.to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Category>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ALL_CATEGORIES)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_category).map_err(wrap_err)?;

                let mut categories = Vec::new();
                for row_result in rows {
                    categories.push(row_result.map_err(wrap_err)?);
                }
                Ok(categories)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Category::ENTITY_TYPE, "unknown"))
    }

    async fn add(&self, category: &Category) -> Result<Category> {
        let mut stored = category.clone();
        let name = category.name.clone();

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(schema::INSERT_CATEGORY, [name])
                    .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Category::ENTITY_TYPE, "unknown"))?;

        stored.assign_id(id);
        Ok(stored)
    }

    async fn update(&self, category: &Category) -> Result<()> {
        let id = category.id;
        let name = category.name.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::UPDATE_CATEGORY, rusqlite::params![id, name])
                    .map_err(wrap_err)?;
                expect_affected(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Category::ENTITY_TYPE, id.to_string()))
    }

    async fn remove(&self, category: &Category) -> Result<()> {
        let id = category.id;

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_CATEGORY, [id])
                    .map_err(wrap_err)?;
                expect_affected(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Category::ENTITY_TYPE, id.to_string()))
    }
}

#[async_trait]
impl Store<Product> for SqliteStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_PRODUCT_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id], row_to_product) {
                    Ok(product) => Ok(Some(product)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Product::ENTITY_TYPE, id.to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Product>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ALL_PRODUCTS)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_product).map_err(wrap_err)?;

                let mut products = Vec::new();
                for row_result in rows {
                    products.push(row_result.map_err(wrap_err)?);
                }
                Ok(products)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Product::ENTITY_TYPE, "unknown"))
    }

    async fn add(&self, product: &Product) -> Result<Product> {
        let mut stored = product.clone();
        let name = product.name.clone();
        let price = format_price(&product.price);
        let quantity = product.quantity;
        let category_id = product.category_id;

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_PRODUCT,
                    rusqlite::params![name, price, quantity, category_id],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Product::ENTITY_TYPE, "unknown"))?;

        stored.assign_id(id);
        Ok(stored)
    }

    async fn update(&self, product: &Product) -> Result<()> {
        let id = product.id;
        let name = product.name.clone();
        let price = format_price(&product.price);
        let quantity = product.quantity;
        let category_id = product.category_id;

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_PRODUCT,
                        rusqlite::params![id, name, price, quantity, category_id],
                    )
                    .map_err(wrap_err)?;
                expect_affected(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Product::ENTITY_TYPE, id.to_string()))
    }

    async fn remove(&self, product: &Product) -> Result<()> {
        let id = product.id;

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_PRODUCT, [id])
                    .map_err(wrap_err)?;
                expect_affected(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Product::ENTITY_TYPE, id.to_string()))
    }
}
