use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    db::review::publish_review,
    errors::AppError,
    models::{Review, ReviewSubmission},
    state::AppState,
    validation::validate_review,
};

/// Validates a submitted review, publishes its wire encoding to the review
/// channel, and echoes the canonical review back. The response does not wait
/// for the publish; delivery is best-effort.
pub async fn create_review_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<ReviewSubmission>,
) -> Result<Json<Review>, (StatusCode, String)> {
    let review = validate_review(&user_id, &payload).map_err(|violations| {
        tracing::warn!(
            "Rejected review from user {}: {} rule(s) violated",
            user_id,
            violations.len()
        );
        AppError::Validation(violations).to_response()
    })?;

    let message = review.to_wire();
    let redis = state.redis.clone();
    let channel = state.reviews_channel.clone();

    tokio::spawn(async move {
        match publish_review(&channel, &message, redis).await {
            Ok(receivers) => {
                tracing::info!("Published review to {}: {} receiver(s)", channel, receivers);
            }
            Err(err) => {
                tracing::error!("Failed to publish review to {}: {}", channel, err);
            }
        }
    });

    Ok(Json(review))
}
