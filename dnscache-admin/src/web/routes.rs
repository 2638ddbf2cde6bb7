use crate::web::handlers;
use crate::web::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::trace::TraceLayer;

/// Build and configure the admin page router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        // Panel operations
        .route("/delete", post(handlers::delete_entry))
        .route("/add", post(handlers::add_entry))
        // Middleware
        .layer(NormalizePathLayer::trim_trailing_slash())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
