use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-canonical record of a user's rating of a product. The user id
/// always comes from the URL path, never from the client body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub user_id: String,
    pub product_id: String,
    pub score: f64,
    pub timestamp: DateTime<Utc>,
}

impl Review {
    /// Flat encoding sent to the review channel:
    /// `<userId>,<productId>,<score to one decimal>,<epoch millis>`.
    /// The delimiter is unescaped; validation keeps commas out of both ids.
    pub fn to_wire(&self) -> String {
        format!(
            "{},{},{},{}",
            self.user_id,
            self.product_id,
            format_score(self.score),
            self.timestamp.timestamp_millis()
        )
    }
}

/// Renders a score with exactly one fractional digit. Rounds to the nearest
/// tenth, ties away from zero: 3.0 -> "3.0", 3.45 -> "3.5", 3.44 -> "3.4".
pub fn format_score(score: f64) -> String {
    format!("{:.1}", (score * 10.0).round() / 10.0)
}

/// Client-supplied review payload, before validation. Every field is
/// optional here so that presence is checked by the validator rather than
/// by the deserializer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmission {
    pub product_id: Option<String>,
    pub score: Option<f64>,
    pub timestamp: Option<TimestampInput>,
}

/// Accepted timestamp shapes: epoch milliseconds as a JSON number, an
/// ISO-8601 instant string, or epoch milliseconds as a decimal string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TimestampInput {
    Millis(i64),
    Text(String),
}
