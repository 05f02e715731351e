use std::sync::{Arc, Mutex};

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::store::{SharedStore, Store};

async fn health_check() -> &'static str {
    "ok"
}

pub fn router(store: Store) -> Router {
    let shared: SharedStore = Arc::new(Mutex::new(store));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/todos", get(handlers::list_todos))
        .route("/api/todos", post(handlers::create_todo))
        .route("/api/todos/{id}", put(handlers::check_todo))
        .route("/api/todos/{id}", delete(handlers::delete_todo))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared)
}
