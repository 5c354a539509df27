use serde::Deserialize;

use catalog_core::catalog::Category;

/// Request payload for creating or replacing a category.
#[derive(Debug, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
}

impl CategoryPayload {
    /// Converts the request into an unpersisted Category.
    pub fn into_category(self) -> Category {
        Category::new(self.name.trim())
    }
}
