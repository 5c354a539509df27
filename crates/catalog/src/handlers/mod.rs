pub mod categories;
pub mod error;
pub mod health;
pub mod products;

pub use error::AppError;

use catalog_core::storage::RepositoryError;

/// Rejects ids that can never belong to a stored record.
fn ensure_valid_id(id: i64) -> Result<(), RepositoryError> {
    if id <= 0 {
        return Err(RepositoryError::InvalidData(format!("Invalid id: {id}")));
    }
    Ok(())
}
