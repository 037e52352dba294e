use crate::core::error::Result;
use async_trait::async_trait;

/// Base repository trait for CRUD operations
/// All repositories should implement this trait for consistency
#[async_trait]
pub trait Repository<T, ID>: Send + Sync {
    /// Persist an entity, assigning an identifier when it has none.
    /// Saving an entity that already carries an identifier follows the
    /// store's own upsert semantics.
    async fn save(&self, entity: T) -> Result<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: ID) -> Result<Option<T>>;

    /// List all entities in the store's natural order
    async fn find_all(&self) -> Result<Vec<T>>;

    /// Delete an entity by ID; a missing ID is left to the store's own
    /// semantics (implementations may silently no-op)
    async fn delete_by_id(&self, id: ID) -> Result<()>;
}
