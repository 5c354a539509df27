//! Cache key scheme.
//!
//! Every record type owns a tag. The whole collection lives under the tag
//! itself and a single record under `{tag}_{id}`.

/// Returns the cache key holding the full collection for a tag.
pub fn list_key(tag: &str) -> String {
    tag.to_string()
}

/// Returns the cache key for a single record.
pub fn item_key(tag: &str, id: i64) -> String {
    format!("{}_{}", tag, id)
}
