use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Message returned in place of results when no page matches.
pub const NO_RESULTS_MESSAGE: &str = "No web page contains the query word.";

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SearchParams {
    #[validate(length(max = 512))]
    pub q: Option<String>,
}

/// One element of the `/search` response array.
///
/// The array holds either ranked hits or a single message; the two shapes
/// are never mixed in one response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchResponseItem {
    Message { message: String },
    Hit { url: String, title: String },
}

impl SearchResponseItem {
    pub fn no_results() -> Self {
        SearchResponseItem::Message {
            message: NO_RESULTS_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub documents: usize,
    pub scoring: String,
    pub cache_requests: u64,
    pub cache_hits: u64,
    pub uptime_seconds: u64,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
            timestamp: Utc::now(),
        }
    }
}
