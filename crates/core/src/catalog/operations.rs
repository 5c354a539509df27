use bigdecimal::{BigDecimal, Zero};

use super::error::CatalogError;
use super::types::{Category, Product};

const MAX_CATEGORY_NAME_LEN: usize = 100;
const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Validates a category before creation or update.
pub fn validate_category(category: &Category) -> Result<(), CatalogError> {
    if category.name.trim().is_empty() {
        return Err(CatalogError::EmptyCategoryName);
    }
    if category.name.chars().count() > MAX_CATEGORY_NAME_LEN {
        return Err(CatalogError::CategoryNameTooLong);
    }
    Ok(())
}

/// Validates a product before creation or update.
///
/// The referenced category is not looked up.
pub fn validate_product(product: &Product) -> Result<(), CatalogError> {
    if product.name.trim().is_empty() {
        return Err(CatalogError::EmptyProductName);
    }
    if product.name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(CatalogError::ProductNameTooLong);
    }
    if product.price < BigDecimal::zero() {
        return Err(CatalogError::NegativePrice(product.price.to_string()));
    }
    if product.quantity < 0 {
        return Err(CatalogError::NegativeQuantity(product.quantity));
    }
    Ok(())
}
