use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of one recommendation request. Never persisted; `records` keeps the
/// order of appearance in the model reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub generated_at: DateTime<Utc>,
    pub records: Vec<RecommendationRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub ticker: String,
    pub name: String,
    pub link: String,
}
