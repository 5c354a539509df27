//! Cached repository decorator.
//!
//! Implements the cache-aside pattern on top of any `Store`:
//!
//! - **Reads**: Check cache first, on miss fetch from the store and populate cache
//! - **Writes**: Persist to the store, then invalidate the affected keys
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let store = Arc::new(SqliteStore::new("catalog.db").await?);
//! let cache = Arc::new(MemoryCache::new(10_000));
//!
//! let categories: CategoryRepository<_, _> =
//!     CachedRepository::new(store, cache, Duration::from_secs(600));
//! ```

mod repository;

pub use repository::{CachedRepository, CategoryRepository, ProductRepository};
