use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult, middleware::request_id::RequestId, models::Recommendation, routes::AppState,
};

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub product: String,
    #[serde(default)]
    pub top_n: Option<usize>,
}

/// Handler for the recommend endpoint
///
/// Unknown products are not an error: they return an empty list.
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> AppResult<Json<Vec<Recommendation>>> {
    let Json(request) = payload?;
    let top_n = request.top_n.unwrap_or(state.default_top_n);

    let recommendations = match state.recommender.try_recommend(&request.product, top_n) {
        Some(recommendations) => recommendations,
        None => {
            tracing::debug!(
                request_id = %request_id,
                product = %request.product,
                "Unknown product"
            );
            Vec::new()
        }
    };

    tracing::info!(
        request_id = %request_id,
        product = %request.product,
        top_n,
        returned = recommendations.len(),
        "Recommendations served"
    );

    Ok(Json(recommendations))
}
