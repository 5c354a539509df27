use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::storage::Record;

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Store-assigned identity. Zero until the category has been persisted.
    pub id: i64,
    pub name: String,
}

impl Category {
    /// Creates a new, not yet persisted category.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
        }
    }

    /// Sets a specific ID for this category (useful for testing).
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

impl Record for Category {
    const ENTITY_TYPE: &'static str = "Category";
    const CACHE_TAG: &'static str = "CategoryList";

    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }

    fn apply_changes(&mut self, changes: Self) {
        self.name = changes.name;
    }
}

/// A product belonging to a category.
///
/// `category_id` is a plain reference; nothing checks that the category
/// exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identity. Zero until the product has been persisted.
    pub id: i64,
    pub name: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub category_id: i64,
}

impl Product {
    /// Creates a new, not yet persisted product.
    pub fn new(
        name: impl Into<String>,
        price: BigDecimal,
        quantity: i32,
        category_id: i64,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            price,
            quantity,
            category_id,
        }
    }

    /// Sets a specific ID for this product (useful for testing).
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

impl Record for Product {
    const ENTITY_TYPE: &'static str = "Product";
    const CACHE_TAG: &'static str = "ProductList";

    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }

    // Every mutable field is replaced, price and quantity included.
    fn apply_changes(&mut self, changes: Self) {
        self.name = changes.name;
        self.price = changes.price;
        self.quantity = changes.quantity;
        self.category_id = changes.category_id;
    }
}
