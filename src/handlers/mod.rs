// handlers/mod.rs - HTTP handlers
//
// comments: the comment resource (list, delete)
// service:  service metadata and health, no storage writes

pub mod comments;
pub mod service;

use std::sync::Arc;

use crate::database::store::CommentStore;

/// Shared handler state. The store is injected once at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CommentStore>,
}

impl AppState {
    pub fn new(store: impl CommentStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn from_shared(store: Arc<dyn CommentStore>) -> Self {
        Self { store }
    }
}
