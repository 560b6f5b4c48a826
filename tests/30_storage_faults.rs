mod common;

use anyhow::Result;
use async_trait::async_trait;
use comments_api::database::{Comment, CommentStore, ObjectId, StoreError};
use comments_api::AppState;
use reqwest::StatusCode;
use serde_json::{json, Value};

/// Store whose every call fails, as an exhausted pool would
struct UnreachableStore;

#[async_trait]
impl CommentStore for UnreachableStore {
    async fn find_all(&self) -> Result<Vec<Comment>, StoreError> {
        Err(StoreError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn find_and_remove(&self, _id: &ObjectId) -> Result<Option<ObjectId>, StoreError> {
        Err(StoreError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    fn backend(&self) -> &'static str {
        "unreachable"
    }
}

#[tokio::test]
async fn list_failure_is_generic_500() -> Result<()> {
    let server = common::spawn_server(AppState::new(UnreachableStore)).await?;

    let res = reqwest::get(format!("{}/comments", server.base_url)).await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = res.json::<Value>().await?;
    assert_eq!(body, json!({ "error": "Failed to fetch comments" }));
    Ok(())
}

#[tokio::test]
async fn delete_failure_is_generic_500() -> Result<()> {
    let server = common::spawn_server(AppState::new(UnreachableStore)).await?;

    let res = reqwest::Client::new()
        .delete(format!("{}/comments/{}", server.base_url, common::FIRST_ID))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.json::<Value>().await?, json!({ "error": "Failed to delete comment" }));
    Ok(())
}

#[tokio::test]
async fn malformed_id_is_rejected_even_when_store_is_down() -> Result<()> {
    let server = common::spawn_server(AppState::new(UnreachableStore)).await?;

    let res = reqwest::Client::new()
        .delete(format!("{}/comments/not-an-object-id", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn health_reports_degraded_store() -> Result<()> {
    let server = common::spawn_server(AppState::new(UnreachableStore)).await?;

    let res = reqwest::get(format!("{}/health", server.base_url)).await?;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = res.json::<Value>().await?;
    assert_eq!(body["data"]["status"], "degraded");
    assert_eq!(body["data"]["database"], "unavailable");
    assert!(!body.to_string().contains("pool timed out"), "cause leaked: {}", body);
    Ok(())
}
