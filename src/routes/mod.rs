use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::Recommender,
};

pub mod home;
pub mod products;
pub mod recommend;

/// Immutable state shared by every handler
#[derive(Debug)]
pub struct AppState {
    pub recommender: Recommender,
    /// Used when a recommend request omits `top_n`
    pub default_top_n: usize,
}

impl AppState {
    pub fn new(recommender: Recommender, default_top_n: usize) -> Self {
        Self {
            recommender,
            default_top_n,
        }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(health_check))
        .route("/products", get(products::list))
        .route("/recommend", post(recommend::recommend))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
