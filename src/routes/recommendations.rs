use axum::{extract::State, Json};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{
    error::AppResult,
    models::{RecommendationRequest, RecommendationResponse},
    services::aggregator,
    state::AppState,
};

/// Handler for the recommendations endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    let mut rng = StdRng::from_entropy();
    let response = aggregator::recommend(state.search.as_ref(), &request, &mut rng).await?;
    Ok(Json(response))
}
