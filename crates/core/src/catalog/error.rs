use thiserror::Error;

/// Errors that can occur when validating catalog records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Category name cannot be empty")]
    EmptyCategoryName,
    #[error("Category name too long (max 100 characters)")]
    CategoryNameTooLong,
    #[error("Product name cannot be empty")]
    EmptyProductName,
    #[error("Product name too long (max 200 characters)")]
    ProductNameTooLong,
    #[error("Product price cannot be negative: {0}")]
    NegativePrice(String),
    #[error("Product quantity cannot be negative: {0}")]
    NegativeQuantity(i32),
}
