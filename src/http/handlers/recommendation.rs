use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{db::recommendation::get_recommendations, models::Recommendation, state::AppState};

pub async fn get_recommendations_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Recommendation>, (StatusCode, String)> {
    let recommendation = get_recommendations(&user_id, state.redis.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving recommendations for {}: {}", user_id, e);
            e.to_response()
        })?;

    tracing::info!(
        "Serving {} recommendations to user {}",
        recommendation.items.len(),
        user_id
    );

    Ok(Json(recommendation))
}
