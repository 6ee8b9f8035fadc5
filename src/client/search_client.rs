use reqwest::Client;
use serde_json::Value as JsonValue;
use tracing::{debug, info, instrument, warn};
use url::Url;
use validator::Validate;

use crate::client::error::{ClientError, ClientResult, GENERIC_FETCH_FAILURE};
use crate::dto::search_dto::{SearchQuery, SearchResponse};

pub const EMPTY_SEARCH_TERM_MESSAGE: &str = "Please enter a job title or keywords";

/// Posts search queries to the backend. One attempt per call, no retries, and
/// no timeout beyond what the HTTP stack does by default.
#[derive(Clone)]
pub struct SearchClient {
    client: Client,
    endpoint: Url,
}

impl SearchClient {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Validates the query locally; nothing is sent when the search term is empty.
    pub fn check_query(query: &SearchQuery) -> ClientResult<()> {
        query
            .validate()
            .map_err(|_| ClientError::Validation(EMPTY_SEARCH_TERM_MESSAGE.to_string()))
    }

    #[instrument(skip(self, query), fields(search_term = %query.search_term))]
    pub async fn search(&self, query: &SearchQuery) -> ClientResult<SearchResponse> {
        Self::check_query(query)?;

        info!(
            endpoint = %self.endpoint,
            location = if query.location.is_empty() { "any location" } else { query.location.as_str() },
            "Starting search"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(%status, body_len = body.len(), "Search response received");

        let parsed = serde_json::from_str::<JsonValue>(&body);

        if !status.is_success() {
            let message = parsed
                .ok()
                .as_ref()
                .and_then(|v| v.get("error"))
                .and_then(JsonValue::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| GENERIC_FETCH_FAILURE.to_string());
            warn!(%status, error = %message, "Search API error");
            return Err(ClientError::Http { status, message });
        }

        let value = parsed.map_err(|err| {
            warn!(error = %err, preview = %preview(&body), "Failed to parse search response");
            ClientError::Parse(err.to_string())
        })?;
        let response: SearchResponse =
            serde_json::from_value(value).map_err(|err| ClientError::Parse(err.to_string()))?;

        info!(jobs = response.jobs.len(), "Search succeeded");
        Ok(response)
    }
}

fn preview(body: &str) -> &str {
    match body.char_indices().nth(200) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_term_is_rejected_locally() {
        let err = SearchClient::check_query(&SearchQuery::new("")).unwrap_err();
        assert!(matches!(err, ClientError::Validation(ref m) if m == EMPTY_SEARCH_TERM_MESSAGE));
        assert!(SearchClient::check_query(&SearchQuery::new("Rust")).is_ok());
    }

    #[test]
    fn preview_cuts_long_bodies_on_char_boundaries() {
        let long = "é".repeat(300);
        assert_eq!(preview(&long).chars().count(), 200);
        assert_eq!(preview("short"), "short");
    }
}
