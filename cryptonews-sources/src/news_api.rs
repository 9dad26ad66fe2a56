//! NewsAPI adapter for keyed API sources

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};
use url::Url;

use cryptonews_core::{ActiveSource, Article};

use crate::adapter::{http_client, SourceAdapter, DEFAULT_FETCH_TIMEOUT};
use crate::dates::parse_iso8601;
use crate::error::SourceError;
use crate::types::NewsApiResponse;

const DEFAULT_SOURCE_NAME: &str = "NewsAPI";

/// Adapter for keyed NewsAPI sources
pub struct NewsApiAdapter {
    client: Client,
}

impl NewsApiAdapter {
    /// Create a NewsAPI adapter with the default 10s timeout
    pub fn new() -> Result<Self, SourceError> {
        Self::with_timeout(DEFAULT_FETCH_TIMEOUT)
    }

    /// Create with a custom per-request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, SourceError> {
        Ok(Self::with_client(http_client(timeout)?))
    }

    /// Create around an existing HTTP client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SourceAdapter for NewsApiAdapter {
    #[instrument(skip(self, source), fields(source = %source.name()))]
    async fn fetch(&self, source: &ActiveSource) -> Result<Vec<Article>, SourceError> {
        let api_key = source
            .api_key()
            .ok_or_else(|| SourceError::MissingApiKey(source.name().to_string()))?;
        let url = request_url(&source.spec().endpoint, api_key)?;

        let response = self.client.get(url).send().await?;

        // NewsAPI reports errors in the JSON envelope, so only bail out on
        // statuses that cannot carry one.
        if response.status().is_server_error() {
            return Err(SourceError::ApiError {
                status: response.status().as_u16(),
                message: format!("{} unavailable", source.name()),
            });
        }

        let body = response.text().await?;
        let articles = parse_response(&body)?;

        debug!("Parsed {} articles from {}", articles.len(), source.name());
        Ok(articles)
    }
}

/// Append the API key to the query template
fn request_url(endpoint: &str, api_key: &str) -> Result<Url, SourceError> {
    let mut url = Url::parse(endpoint)
        .map_err(|e| SourceError::InvalidConfig(format!("{}: {}", endpoint, e)))?;
    url.query_pairs_mut().append_pair("apiKey", api_key);
    Ok(url)
}

/// Parse a NewsAPI response body
///
/// A non-`"ok"` status yields no articles. A missing required field or an
/// unreadable `publishedAt` fails the whole response.
pub fn parse_response(body: &str) -> Result<Vec<Article>, SourceError> {
    let envelope: NewsApiResponse =
        serde_json::from_str(body).map_err(|e| SourceError::ParseError(e.to_string()))?;

    if envelope.status != "ok" {
        warn!(
            "NewsAPI returned status '{}' (code: {}, message: {})",
            envelope.status,
            envelope.code.as_deref().unwrap_or("none"),
            envelope.message.as_deref().unwrap_or("none")
        );
        return Ok(Vec::new());
    }

    envelope
        .articles
        .into_iter()
        .map(|item| -> Result<Article, SourceError> {
            let published_at = parse_iso8601(&item.published_at).ok_or_else(|| {
                SourceError::ParseError(format!("bad publishedAt '{}'", item.published_at))
            })?;

            let source_name = item
                .source
                .and_then(|s| s.name)
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SOURCE_NAME.to_string());

            Ok(Article::new(
                item.title,
                item.description.unwrap_or_default(),
                item.url,
                published_at,
                source_name,
            ))
        })
        .collect()
}
