//! Application route configuration.

use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use super::handlers::{auth_routes, person_routes, upload_routes};
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Greeting endpoint
        .route("/", get(home))
        // Person resource
        .nest("/person", person_routes())
        // Form-driven endpoints (/login, /contact)
        .merge(auth_routes())
        // Multipart uploads (/post-image, /post-images)
        .merge(upload_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn home() -> Json<Value> {
    Json(json!({ "Hello": "World" }))
}
