use crate::{
    errors::AppError,
    models::{Recommendation, redis::RedisKey},
    state::RedisClient,
};
use redis::AsyncCommands;

/// Fetches the precomputed recommendation list for a user. A user with no
/// stored list gets the deterministic default list, never an error.
pub async fn get_recommendations(
    user_id: &str,
    redis: RedisClient,
) -> Result<Recommendation, AppError> {
    let mut conn = redis.get().await.map_err(|e| match e {
        bb8::RunError::User(err) => AppError::RedisCommandError(err),
        bb8::RunError::TimedOut => AppError::RedisPoolError("Redis connection timed out".into()),
    })?;

    let key = RedisKey::recommendations(user_id);

    let items: Vec<String> = conn
        .lrange(&key, 0, -1)
        .await
        .map_err(AppError::RedisCommandError)?;

    if items.is_empty() {
        tracing::debug!("No stored recommendations for user {}, using default", user_id);
        return Ok(Recommendation::fallback(user_id));
    }

    Ok(Recommendation {
        user_id: user_id.to_string(),
        items,
    })
}
