//! SQLite schema definitions and SQL query constants.

/// SQL statement to create all tables.
///
/// `AUTOINCREMENT` keeps ids of deleted rows from being handed out again.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    price TEXT NOT NULL,
    quantity INTEGER NOT NULL,
    category_id INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_products_category_id ON products(category_id);
"#;

// Category queries
pub const INSERT_CATEGORY: &str = r#"
INSERT INTO categories (name)
VALUES (?1)
"#;

pub const SELECT_CATEGORY_BY_ID: &str = r#"
SELECT id, name
FROM categories
WHERE id = ?1
"#;

pub const SELECT_ALL_CATEGORIES: &str = r#"
SELECT id, name
FROM categories
ORDER BY id
"#;

pub const UPDATE_CATEGORY: &str = r#"
UPDATE categories
SET name = ?2
WHERE id = ?1
"#;

pub const DELETE_CATEGORY: &str = r#"
DELETE FROM categories
WHERE id = ?1
"#;

// Product queries
pub const INSERT_PRODUCT: &str = r#"
INSERT INTO products (name, price, quantity, category_id)
VALUES (?1, ?2, ?3, ?4)
"#;

pub const SELECT_PRODUCT_BY_ID: &str = r#"
SELECT id, name, price, quantity, category_id
FROM products
WHERE id = ?1
"#;

pub const SELECT_ALL_PRODUCTS: &str = r#"
SELECT id, name, price, quantity, category_id
FROM products
ORDER BY id
"#;

pub const UPDATE_PRODUCT: &str = r#"
UPDATE products
SET name = ?2, price = ?3, quantity = ?4, category_id = ?5
WHERE id = ?1
"#;

pub const DELETE_PRODUCT: &str = r#"
DELETE FROM products
WHERE id = ?1
"#;
