//! Core for the catalog service.
//!
//! Pure domain types and the contracts the cache-aside repository is built
//! on. Nothing in this crate performs I/O; the concrete stores and caches
//! live in the `catalog` binary crate.

pub mod cache;
pub mod catalog;
pub mod storage;
