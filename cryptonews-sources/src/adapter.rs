//! Source adapter abstraction

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use cryptonews_core::{ActiveSource, Article};

use crate::error::SourceError;

/// Per-call network timeout
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = "CryptoNewsBot/1.0";

/// Converts one kind of source into normalized articles
///
/// Implementations own their HTTP client and build a fresh article list per
/// call. Errors are returned, not logged: the caller decides how a failed
/// source is reported.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Fetch and normalize articles from one source
    async fn fetch(&self, source: &ActiveSource) -> Result<Vec<Article>, SourceError>;
}

/// HTTP client shared by the adapters
pub fn http_client(timeout: Duration) -> Result<Client, SourceError> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}
