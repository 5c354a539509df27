//! SQLite storage backend.
//!
//! Uses `rusqlite` for the queries and `tokio-rusqlite` to run them on a
//! dedicated connection thread.

mod conversions;
mod error;
mod schema;
mod store;

pub use store::SqliteStore;
