//! SQLite row conversion functions.
//!
//! Prices are stored as decimal TEXT so no precision is lost to REAL.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use rusqlite::Row;

use catalog_core::catalog::{Category, Product};

/// Convert a SQLite row to a Category.
///
/// Expected columns: id, name
pub fn row_to_category(row: &Row) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

/// Convert a SQLite row to a Product.
///
/// Expected columns: id, name, price, quantity, category_id
pub fn row_to_product(row: &Row) -> rusqlite::Result<Product> {
    let price: String = row.get(2)?;

    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        price: parse_price(2, &price)?,
        quantity: row.get(3)?,
        category_id: row.get(4)?,
    })
}

fn parse_price(column: usize, s: &str) -> rusqlite::Result<BigDecimal> {
    BigDecimal::from_str(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Format a price for SQLite storage.
pub fn format_price(price: &BigDecimal) -> String {
    price.to_string()
}
