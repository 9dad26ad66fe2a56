//! News Aggregator
//!
//! Fetches every active source concurrently and merges the results into one
//! ranked article list. A failing or slow source only loses its own
//! contribution.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use cryptonews_core::{ActiveSource, Article, SourceKind};
use cryptonews_sources::{
    FeedAdapter, NewsApiAdapter, SourceAdapter, SourceError, DEFAULT_FETCH_TIMEOUT,
};

use crate::ranking::{top_articles, MAX_RESULTS};

/// Configuration for NewsAggregator
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Upper bound on a single source fetch
    pub fetch_timeout: Duration,
    /// Maximum articles returned by [`NewsAggregator::aggregate`]
    pub max_results: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            max_results: MAX_RESULTS,
        }
    }
}

/// Concurrent multi-source fetcher
pub struct NewsAggregator {
    sources: Vec<ActiveSource>,
    feed_adapter: Arc<dyn SourceAdapter>,
    keyed_adapter: Arc<dyn SourceAdapter>,
    config: AggregatorConfig,
}

impl NewsAggregator {
    /// Create an aggregator using the HTTP feed and NewsAPI adapters
    pub fn new(sources: Vec<ActiveSource>, config: AggregatorConfig) -> Result<Self, SourceError> {
        let feed_adapter = Arc::new(FeedAdapter::with_timeout(config.fetch_timeout)?);
        let keyed_adapter = Arc::new(NewsApiAdapter::with_timeout(config.fetch_timeout)?);
        Ok(Self::with_adapters(sources, feed_adapter, keyed_adapter, config))
    }

    /// Create with custom adapters
    pub fn with_adapters(
        sources: Vec<ActiveSource>,
        feed_adapter: Arc<dyn SourceAdapter>,
        keyed_adapter: Arc<dyn SourceAdapter>,
        config: AggregatorConfig,
    ) -> Self {
        info!(
            "Initializing NewsAggregator with {} active source(s): {:?}",
            sources.len(),
            sources.iter().map(|s| s.name()).collect::<Vec<_>>()
        );
        Self {
            sources,
            feed_adapter,
            keyed_adapter,
            config,
        }
    }

    /// Sources this aggregator fetches, in merge order
    pub fn sources(&self) -> &[ActiveSource] {
        &self.sources
    }

    fn adapter_for(&self, kind: SourceKind) -> &dyn SourceAdapter {
        match kind {
            SourceKind::Feed => self.feed_adapter.as_ref(),
            SourceKind::KeyedApi => self.keyed_adapter.as_ref(),
        }
    }

    /// Fetch one source; `None` if it failed or timed out
    async fn fetch_source(&self, source: &ActiveSource) -> Option<Vec<Article>> {
        let adapter = self.adapter_for(source.kind());

        match timeout(self.config.fetch_timeout, adapter.fetch(source)).await {
            Ok(Ok(articles)) => {
                debug!("Fetched {} articles from {}", articles.len(), source.name());
                Some(articles)
            }
            Ok(Err(e)) => {
                warn!("Failed to fetch {}: {}", source.name(), e);
                None
            }
            Err(_) => {
                warn!(
                    "Fetching {} timed out after {:?}",
                    source.name(),
                    self.config.fetch_timeout
                );
                None
            }
        }
    }

    /// Fetch all sources concurrently and concatenate their articles in
    /// source order
    pub async fn fetch_all(&self) -> Vec<Article> {
        let results = join_all(self.sources.iter().map(|s| self.fetch_source(s))).await;

        let failed = results.iter().filter(|r| r.is_none()).count();
        let articles: Vec<Article> = results.into_iter().flatten().flatten().collect();

        info!(
            "Fetched {} articles from {} source(s) ({} failed)",
            articles.len(),
            self.sources.len(),
            failed
        );
        articles
    }

    /// Fetch, deduplicate and rank: the newest `max_results` unique articles
    pub async fn aggregate(&self) -> Vec<Article> {
        top_articles(self.fetch_all().await, self.config.max_results)
    }
}
