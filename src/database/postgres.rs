use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::database::models::comment::{Comment, CommentRow};
use crate::database::object_id::ObjectId;
use crate::database::store::{CommentStore, StoreError};

const CREATE_COMMENTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS comments (
    id CHAR(24) PRIMARY KEY,
    document JSONB NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)";

/// Comment store backed by a Postgres `comments` table of JSONB documents
#[derive(Debug, Clone)]
pub struct PgCommentStore {
    pool: PgPool,
}

impl PgCommentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool from configuration and make sure the table exists
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let connection_string = validated_url(config.url.as_deref())?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(&connection_string)
            .await?;

        let store = Self::new(pool);
        store.ensure_schema().await?;
        info!(max_connections = config.max_connections, "Connected comment store to Postgres");
        Ok(store)
    }

    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_COMMENTS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert or replace a comment document
    pub async fn insert(&self, comment: &Comment) -> Result<(), StoreError> {
        let document = serde_json::Value::Object(comment.fields.clone());
        sqlx::query(
            "INSERT INTO comments (id, document) VALUES ($1, $2)
             ON CONFLICT (id) DO UPDATE SET document = EXCLUDED.document",
        )
        .bind(comment.id.to_hex())
        .bind(sqlx::types::Json(document))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Closed comment store pool");
    }
}

fn validated_url(raw: Option<&str>) -> Result<String, StoreError> {
    let raw = raw.ok_or(StoreError::ConfigMissing("DATABASE_URL"))?;
    let url = url::Url::parse(raw).map_err(|_| StoreError::InvalidDatabaseUrl)?;
    match url.scheme() {
        "postgres" | "postgresql" => Ok(url.into()),
        _ => Err(StoreError::InvalidDatabaseUrl),
    }
}

#[async_trait]
impl CommentStore for PgCommentStore {
    async fn find_all(&self) -> Result<Vec<Comment>, StoreError> {
        sqlx::query_as::<_, CommentRow>(
            "SELECT id, document, created_at FROM comments ORDER BY created_at, id",
        )
        .fetch(&self.pool)
        .map_err(StoreError::from)
        .and_then(|row| async move { Comment::try_from(row) })
        .try_collect()
        .await
    }

    async fn find_and_remove(&self, id: &ObjectId) -> Result<Option<ObjectId>, StoreError> {
        // Single statement, so concurrent deletes of one id cannot both see the row.
        // Only the id comes back: the row is already gone, whatever its document holds.
        let removed = sqlx::query_scalar::<_, String>("DELETE FROM comments WHERE id = $1 RETURNING id")
            .bind(id.to_hex())
            .fetch_optional(&self.pool)
            .await?;

        debug!(%id, removed = removed.is_some(), "postgres store find_and_remove");
        Ok(removed.map(|_| *id))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
