mod error;
mod operations;
mod types;

pub use error::CatalogError;
pub use operations::{validate_category, validate_product};
pub use types::{Category, Product};
