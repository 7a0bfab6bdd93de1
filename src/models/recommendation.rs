use serde::{Deserialize, Serialize};

/// Ordered product ids served when a user has no stored list.
pub const DEFAULT_ITEMS: [&str; 5] = ["101", "102", "103", "104", "105"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub user_id: String,
    pub items: Vec<String>,
}

impl Recommendation {
    pub fn fallback(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            items: DEFAULT_ITEMS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
