use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{models::ProductSummary, routes::AppState};

/// Lists the catalog in catalog order
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<ProductSummary>> {
    let products = state
        .recommender
        .catalog()
        .products()
        .iter()
        .map(ProductSummary::from)
        .collect();
    Json(products)
}
