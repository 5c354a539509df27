use bigdecimal::BigDecimal;
use serde::Deserialize;

use catalog_core::catalog::Product;

/// Request payload for creating or replacing a product.
///
/// `price` accepts a JSON string (`"19.90"`) or number.
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub price: BigDecimal,
    #[serde(default)]
    pub quantity: i32,
    pub category_id: i64,
}

impl ProductPayload {
    /// Converts the request into an unpersisted Product.
    pub fn into_product(self) -> Product {
        Product::new(
            self.name.trim(),
            self.price,
            self.quantity,
            self.category_id,
        )
    }
}
