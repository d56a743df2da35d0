use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::handlers::{health_check, list_activities, root, signup, unregister};
use crate::store::ActivityStore;

pub fn create_routes(store: Arc<ActivityStore>, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/activities", get(list_activities))
        .route("/activities/:activity_name/signup", post(signup))
        .route("/activities/:activity_name/unregister", post(unregister))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(store)
        .layer(TraceLayer::new_for_http())
        .layer(create_security_headers_layer())
        .layer(create_cors_layer())
}
