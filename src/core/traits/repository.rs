use crate::core::error::Result;
use async_trait::async_trait;

/// Read-only lookup contract over one backing collection.
///
/// A provider is bound to a single collection (file, table, in-memory list)
/// at construction. Absence is not an error: `find_by_id` returns `None` and
/// the caller decides whether that is fatal. Each call may re-read the store;
/// no caching or snapshot isolation is guaranteed.
#[async_trait]
pub trait DataProvider<T, ID>: Send + Sync {
    /// Returns the entire collection.
    async fn find_all(&self) -> Result<Vec<T>>;

    /// Returns the first record whose id matches, or `None`.
    async fn find_by_id(&self, id: &ID) -> Result<Option<T>>;
}
