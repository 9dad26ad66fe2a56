//! RSS/Atom feed adapter
//!
//! Fetches a syndication feed and normalizes its newest entries into articles.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::{debug, instrument};

use cryptonews_core::{ActiveSource, Article};

use crate::adapter::{http_client, SourceAdapter, DEFAULT_FETCH_TIMEOUT};
use crate::dates::parse_feed_date;
use crate::error::SourceError;

/// Entries read from each feed; more than the digest needs so that
/// deduplication still leaves enough.
pub const MAX_FEED_ENTRIES: usize = 15;

/// Adapter for syndication feed sources
pub struct FeedAdapter {
    client: Client,
}

impl FeedAdapter {
    /// Create a feed adapter with the default 10s timeout
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
impl SourceAdapter for FeedAdapter {
    #[instrument(skip(self, source), fields(source = %source.name()))]
    async fn fetch(&self, source: &ActiveSource) -> Result<Vec<Article>, SourceError> {
        let fetched_at = Utc::now();
        let url = &source.spec().endpoint;

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::ApiError {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", url),
            });
        }

        let content = response.bytes().await?;
        let articles = parse_feed(&content, source.name(), fetched_at)?;

        debug!("Parsed {} articles from {}", articles.len(), source.name());
        Ok(articles)
    }
}

/// Parse raw feed bytes, trying RSS first, then Atom
///
/// Entries without a date (or with an unreadable one) are stamped with
/// `fetched_at`.
pub fn parse_feed(
    content: &[u8],
    source_name: &str,
    fetched_at: DateTime<Utc>,
) -> Result<Vec<Article>, SourceError> {
    if let Ok(channel) = rss::Channel::read_from(content) {
        return Ok(parse_rss_channel(&channel, source_name, fetched_at));
    }

    if let Ok(atom_feed) = atom_syndication::Feed::read_from(content) {
        return Ok(parse_atom_feed(&atom_feed, source_name, fetched_at));
    }

    Err(SourceError::ParseError(format!(
        "{} is neither RSS nor Atom",
        source_name
    )))
}

fn parse_rss_channel(
    channel: &rss::Channel,
    source_name: &str,
    fetched_at: DateTime<Utc>,
) -> Vec<Article> {
    channel
        .items()
        .iter()
        .take(MAX_FEED_ENTRIES)
        .filter_map(|item| {
            let title = clean_text(item.title()?);
            let url = item.link()?.trim().to_string();
            if title.is_empty() || url.is_empty() {
                return None;
            }

            let published_at = item
                .pub_date()
                .and_then(parse_feed_date)
                .or_else(|| {
                    item.dublin_core_ext()
                        .and_then(|dc| dc.dates().first())
                        .and_then(|d| parse_feed_date(d))
                })
                .unwrap_or(fetched_at);

            let description = item
                .description()
                .or_else(|| item.content())
                .map(clean_text)
                .unwrap_or_default();

            Some(Article::new(title, description, url, published_at, source_name))
        })
        .collect()
}

fn parse_atom_feed(
    atom_feed: &atom_syndication::Feed,
    source_name: &str,
    fetched_at: DateTime<Utc>,
) -> Vec<Article> {
    atom_feed
        .entries()
        .iter()
        .take(MAX_FEED_ENTRIES)
        .filter_map(|entry| {
            let title = clean_text(entry.title().as_str());
            let url = entry
                .links()
                .first()
                .map(|l| l.href().trim().to_string())
                .unwrap_or_default();

            if title.is_empty() || url.is_empty() {
                return None;
            }

            let published_at = entry
                .published()
                .map(|d| d.with_timezone(&Utc))
                .unwrap_or(fetched_at);

            let summary_html = entry.summary().map(|s| s.as_str()).unwrap_or_default();
            let description = if !summary_html.is_empty() {
                clean_text(summary_html)
            } else {
                clean_text(entry.content().and_then(|c| c.value()).unwrap_or_default())
            };

            Some(Article::new(title, description, url, published_at, source_name))
        })
        .collect()
}

/// Strip HTML tags, decode common entities and collapse whitespace
fn clean_text(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#039;", "'")
        .replace("&apos;", "'")
        .replace("&#8217;", "\u{2019}")
        .replace("&#8216;", "\u{2018}")
        .replace("&#8220;", "\u{201C}")
        .replace("&#8221;", "\u{201D}")
        .replace("&amp;", "&")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
