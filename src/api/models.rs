use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Body of both the HTML form post and the JSON endpoint.
#[derive(Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub url: String,
}

#[derive(Serialize)]
pub struct SummarizeResponse {
    pub url: String,
    pub summary: String,
    pub summarized_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
