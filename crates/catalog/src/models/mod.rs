mod category;
mod product;

pub use category::CategoryPayload;
pub use product::ProductPayload;
