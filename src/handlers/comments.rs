use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use tracing::{debug, info};

use crate::api::{
    CommentPath, DeleteConfirmation, COMMENT_NOT_FOUND, DELETE_FAILED, FETCH_FAILED,
    INVALID_COMMENT_ID,
};
use crate::database::models::comment::Comment;
use crate::database::object_id::ObjectId;
use crate::error::ApiError;

use super::AppState;

/// GET /comments - every stored comment
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Comment>>, ApiError> {
    let comments = state
        .store
        .find_all()
        .await
        .map_err(|e| ApiError::storage(FETCH_FAILED, e))?;

    debug!(count = comments.len(), "Listed comments");
    Ok(Json(comments))
}

/// DELETE /comments/:commentId - remove one comment
///
/// Malformed ids are rejected before the store is touched. Removal is a single
/// find-and-remove call, so a concurrent delete of the same id sees 404.
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<CommentPath>, PathRejection>,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    let id = match path {
        Ok(Path(CommentPath { comment_id })) => parse_comment_id(&comment_id)?,
        Err(rejection) => {
            debug!(%rejection, "Unreadable comment id");
            return Err(ApiError::bad_request(INVALID_COMMENT_ID));
        }
    };

    match state.store.find_and_remove(&id).await {
        Ok(Some(_)) => {
            info!(%id, "Deleted comment");
            Ok(Json(DeleteConfirmation::deleted()))
        }
        Ok(None) => Err(ApiError::not_found(COMMENT_NOT_FOUND)),
        Err(e) => Err(ApiError::storage(DELETE_FAILED, e)),
    }
}

fn parse_comment_id(raw: &str) -> Result<ObjectId, ApiError> {
    raw.parse().map_err(|_| {
        debug!(comment_id = raw, "Rejected malformed comment id");
        ApiError::bad_request(INVALID_COMMENT_ID)
    })
}
