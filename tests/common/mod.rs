#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use comments_api::config::AppConfig;
use comments_api::database::{Comment, MemoryCommentStore};
use comments_api::AppState;
use serde_json::{json, Map};
use tokio::task::JoinHandle;

pub const FIRST_ID: &str = "507f1f77bcf86cd799439011";
pub const SECOND_ID: &str = "507f191e810c19729de860ea";

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Serve the app in-process on an unused port
pub async fn spawn_server(state: AppState) -> Result<TestServer> {
    init_tracing();

    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let base_url = format!("http://127.0.0.1:{}", port);

    let mut config = AppConfig::development();
    config.api.port = port;
    let app = comments_api::app(state, &config);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .with_context(|| format!("failed to bind {}", base_url))?;

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("test server stopped: {}", e);
        }
    });

    Ok(TestServer { port, base_url, handle })
}

/// Server over a memory store seeded with `comments`; the store is shared so
/// tests can inspect it directly
pub async fn spawn_seeded(comments: Vec<Comment>) -> Result<(TestServer, Arc<MemoryCommentStore>)> {
    let store = Arc::new(MemoryCommentStore::with_comments(comments));
    let server = spawn_server(AppState::from_shared(store.clone())).await?;
    Ok((server, store))
}

pub fn comment(id: &str, body: &str) -> Comment {
    let mut fields = Map::new();
    fields.insert("body".to_string(), json!(body));
    fields.insert("author".to_string(), json!("tester"));
    Comment::new(id.parse().expect("test ids are valid"), fields)
}

pub fn scenario_comments() -> Vec<Comment> {
    vec![comment(FIRST_ID, "first"), comment(SECOND_ID, "second")]
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
