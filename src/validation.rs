use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

use crate::models::{Review, ReviewSubmission, TimestampInput};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 5.0;

/// A single failed validation rule, reported back to the client.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Checks every rule and collects every failure before reporting, so one
/// response names all the problems with a request. On success the canonical
/// review is built from the path user id plus the submitted fields.
pub fn validate_review(
    user_id: &str,
    submission: &ReviewSubmission,
) -> Result<Review, Vec<Violation>> {
    let mut violations = Vec::new();

    if user_id.trim().is_empty() {
        violations.push(Violation::new("userId", "must not be blank"));
    } else if !user_id.chars().all(|c| c.is_ascii_alphanumeric()) {
        violations.push(Violation::new(
            "userId",
            "must only contain alphanumeric characters",
        ));
    }

    let product_id = match &submission.product_id {
        None => {
            violations.push(Violation::new("productId", "is required"));
            None
        }
        Some(p) if p.trim().is_empty() => {
            violations.push(Violation::new("productId", "must not be blank"));
            None
        }
        Some(p) if p.contains(',') => {
            violations.push(Violation::new("productId", "must not contain commas"));
            None
        }
        Some(p) => Some(p.clone()),
    };

    let score = match submission.score {
        None => {
            violations.push(Violation::new("score", "is required"));
            None
        }
        Some(s) if !s.is_finite() => {
            violations.push(Violation::new("score", "must be a finite number"));
            None
        }
        Some(s) if !(MIN_SCORE..=MAX_SCORE).contains(&s) => {
            violations.push(Violation::new(
                "score",
                format!("must be between {MIN_SCORE} and {MAX_SCORE}"),
            ));
            None
        }
        Some(s) => Some(s),
    };

    let timestamp = match &submission.timestamp {
        None => {
            violations.push(Violation::new("timestamp", "is required"));
            None
        }
        Some(input) => match resolve_timestamp(input) {
            Ok(t) => Some(t),
            Err(message) => {
                violations.push(Violation::new("timestamp", message));
                None
            }
        },
    };

    if violations.is_empty() {
        if let (Some(product_id), Some(score), Some(timestamp)) = (product_id, score, timestamp) {
            return Ok(Review {
                user_id: user_id.to_string(),
                product_id,
                score,
                timestamp,
            });
        }
    }

    Err(violations)
}

fn resolve_timestamp(input: &TimestampInput) -> Result<DateTime<Utc>, String> {
    match input {
        TimestampInput::Millis(millis) => millis_to_instant(*millis),
        TimestampInput::Text(text) => {
            if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
                return Ok(parsed.with_timezone(&Utc));
            }
            if let Ok(millis) = text.parse::<i64>() {
                return millis_to_instant(millis);
            }
            Err("must be an ISO-8601 instant or epoch milliseconds".to_string())
        }
    }
}

fn millis_to_instant(millis: i64) -> Result<DateTime<Utc>, String> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| "is out of range".to_string())
}
