use axum::{
    http::{HeaderValue, Method},
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{AppConfig, SecurityConfig};
use crate::handlers::{comments, service, AppState};

/// Full application router with middleware applied per configuration
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        .route("/", get(service::root))
        .route("/health", get(service::health))
        .merge(comment_routes())
        .nest("/api", comment_routes())
        .with_state(state);

    if config.security.enable_cors {
        router = router.layer(cors_layer(&config.security));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

/// The comment resource, mountable under any prefix
pub fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comments", get(comments::list))
        .route("/comments/", get(comments::list))
        .route("/comments/:commentId", delete(comments::delete))
        .route("/comments/:commentId/", delete(comments::delete))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if security.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::DELETE])
        .allow_headers(Any)
}
