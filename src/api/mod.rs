//! Wire types for the comment resource

use serde::{Deserialize, Serialize};

pub const FETCH_FAILED: &str = "Failed to fetch comments";
pub const INVALID_COMMENT_ID: &str = "Invalid comment ID";
pub const COMMENT_NOT_FOUND: &str = "Comment not found";
pub const DELETE_FAILED: &str = "Failed to delete comment";
pub const COMMENT_DELETED: &str = "Comment deleted successfully";

/// Path parameters of `/comments/:commentId`
#[derive(Debug, Clone, Deserialize)]
pub struct CommentPath {
    #[serde(rename = "commentId")]
    pub comment_id: String,
}

/// 200 body of a successful delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl DeleteConfirmation {
    pub fn deleted() -> Self {
        Self {
            message: COMMENT_DELETED.to_string(),
        }
    }
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
