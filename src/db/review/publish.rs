use crate::{errors::AppError, state::RedisClient};

/// Publishes an encoded review to the channel consumed by the downstream
/// engine. Returns the number of subscribers that received it.
pub async fn publish_review(
    channel: &str,
    payload: &str,
    redis: RedisClient,
) -> Result<i64, AppError> {
    let mut conn = redis.get().await.map_err(|e| match e {
        bb8::RunError::User(err) => AppError::RedisCommandError(err),
        bb8::RunError::TimedOut => AppError::RedisPoolError("Redis connection timed out".into()),
    })?;

    let receivers: i64 = redis::cmd("PUBLISH")
        .arg(channel)
        .arg(payload)
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(receivers)
}
