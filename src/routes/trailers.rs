use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct TrailerParams {
    pub title: String,
    #[serde(default)]
    pub year: Option<String>,
}

/// Handler for trailer lookup
///
/// Always answers with a `videoId` field; a lookup that found nothing (or
/// failed upstream) carries null rather than an error.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<TrailerParams>,
) -> AppResult<Json<Value>> {
    let title = params.title.trim();
    if title.is_empty() {
        return Err(AppError::InvalidInput("Missing title".to_string()));
    }

    let video_id = state
        .trailers
        .find_trailer(title, params.year.as_deref())
        .await;

    Ok(Json(json!({ "videoId": video_id })))
}
