mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{item_key, list_key};
pub use serialization::{
    deserialize_record, deserialize_records, serialize_record, serialize_records,
    SerializationError,
};
pub use traits::Cache;
