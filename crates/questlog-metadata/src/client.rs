//! Catalog search client

use crate::{GameCandidate, MetadataError};
use std::time::Duration;

/// Searches the metadata catalog for games.
pub struct CatalogClient {
    endpoint: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl CatalogClient {
    /// Create a new catalog client.
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(format!("Questlog/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint: endpoint.into(),
            api_key,
            client,
        }
    }

    /// Search the catalog. Returns zero or more candidate records; an
    /// empty list means the query matched nothing.
    pub async fn search(&self, query: &str) -> Result<Vec<GameCandidate>, MetadataError> {
        let url = format!("{}/games", self.endpoint);

        tracing::debug!("Searching catalog for {:?}", query);

        let mut request = self
            .client
            .get(&url)
            .query(&[("search", query), ("limit", "20")]);

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(MetadataError::SearchFailed(format!(
                "Server returned {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        parse_candidates(&body)
    }
}

/// Parse a catalog response body into candidate records.
fn parse_candidates(body: &str) -> Result<Vec<GameCandidate>, MetadataError> {
    Ok(serde_json::from_str(body)?)
}
