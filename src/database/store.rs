use async_trait::async_trait;
use thiserror::Error;

use crate::database::models::comment::Comment;
use crate::database::object_id::ObjectId;

/// Failures originating in the storage layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error("Corrupt document {id}: {reason}")]
    CorruptDocument { id: String, reason: String },

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Document store holding comments.
///
/// Implementations must make `find_and_remove` atomic: when two callers race
/// on the same id, exactly one of them sees the removal.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Every stored comment, in the store's natural order
    async fn find_all(&self) -> Result<Vec<Comment>, StoreError>;

    /// Remove the comment with `id`. Returns the removed id, or `None` if it
    /// was absent. The document body is not decoded.
    async fn find_and_remove(&self, id: &ObjectId) -> Result<Option<ObjectId>, StoreError>;

    /// Cheap connectivity check
    async fn ping(&self) -> Result<(), StoreError>;

    /// Backend name for logs and the health endpoint
    fn backend(&self) -> &'static str;
}
