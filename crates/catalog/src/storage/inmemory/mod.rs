//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of the `Store` trait
//! that keeps each table in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. This is
//! useful for testing and development scenarios where persistence is not
//! required.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog::storage::inmemory::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! // Use store for testing...
//! ```

mod store;

pub use store::InMemoryStore;
