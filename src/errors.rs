use axum::http::StatusCode;
use redis::RedisError;
use serde::Serialize;
use thiserror::Error;

use crate::validation::Violation;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Redis pool error: {0}")]
    RedisPoolError(String),

    #[error("Redis command error: {0}")]
    RedisCommandError(#[from] RedisError),

    #[error("Validation failed")]
    Validation(Vec<Violation>),

    #[error("Internal server error")]
    InternalError,
}

#[derive(Serialize)]
struct ValidationBody<'a> {
    errors: &'a [Violation],
}

impl AppError {
    pub fn to_response(&self) -> (StatusCode, String) {
        match self {
            AppError::RedisPoolError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.clone()),
            AppError::RedisCommandError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::Validation(violations) => {
                let body = serde_json::to_string(&ValidationBody { errors: violations })
                    .unwrap_or_else(|_| "Validation failed".into());
                (StatusCode::BAD_REQUEST, body)
            }
            AppError::InternalError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unexpected server error".into(),
            ),
        }
    }
}
