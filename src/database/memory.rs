use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::database::models::comment::Comment;
use crate::database::object_id::ObjectId;
use crate::database::store::{CommentStore, StoreError};

/// In-process comment store. Keeps insertion order.
#[derive(Debug, Default)]
pub struct MemoryCommentStore {
    comments: RwLock<Vec<Comment>>,
}

impl MemoryCommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comments(comments: impl IntoIterator<Item = Comment>) -> Self {
        let mut deduped: Vec<Comment> = Vec::new();
        for comment in comments {
            upsert(&mut deduped, comment);
        }
        Self {
            comments: RwLock::new(deduped),
        }
    }

    /// Insert a comment, replacing any existing one with the same id
    pub async fn insert(&self, comment: Comment) {
        let mut comments = self.comments.write().await;
        upsert(&mut comments, comment);
    }

    pub async fn len(&self) -> usize {
        self.comments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.comments.read().await.is_empty()
    }
}

fn upsert(comments: &mut Vec<Comment>, comment: Comment) {
    match comments.iter_mut().find(|c| c.id == comment.id) {
        Some(existing) => *existing = comment,
        None => comments.push(comment),
    }
}

#[async_trait]
impl CommentStore for MemoryCommentStore {
    async fn find_all(&self) -> Result<Vec<Comment>, StoreError> {
        Ok(self.comments.read().await.clone())
    }

    async fn find_and_remove(&self, id: &ObjectId) -> Result<Option<ObjectId>, StoreError> {
        // Lookup and removal happen under one write guard
        let mut comments = self.comments.write().await;
        let removed = comments
            .iter()
            .position(|c| &c.id == id)
            .map(|index| comments.remove(index).id);
        debug!(%id, removed = removed.is_some(), "memory store find_and_remove");
        Ok(removed)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
