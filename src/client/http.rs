use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::client::SearchFetcher;
use crate::error::ClientError;

/// Percent-encodes a query for use as a URL query parameter value.
pub fn encode_query(query: &str) -> String {
    urlencoding::encode(query).into_owned()
}

/// Request path of the search endpoint for `query`.
pub fn search_path(query: &str) -> String {
    format!("/search?q={}", encode_query(query))
}

/// Fetches search results from a running server over HTTP.
#[derive(Clone)]
pub struct HttpSearchFetcher {
    http_client: reqwest::Client,
    base_url: Arc<str>,
}

impl HttpSearchFetcher {
    pub fn new(http_client: reqwest::Client, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SearchFetcher for HttpSearchFetcher {
    async fn fetch_json(&self, path: &str) -> Result<Value, ClientError> {
        let body = self
            .http_client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}
