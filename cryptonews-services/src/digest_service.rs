//! Digest Service
//!
//! One pipeline run: fetch, rank, summarize and format. The result is either
//! an ordered message sequence for the transport or an explicit "no news"
//! outcome.

use async_trait::async_trait;
use tracing::{info, instrument};

use cryptonews_core::OutboundMessage;

use crate::formatter::format_digest;
use crate::news_aggregator::NewsAggregator;

/// Result of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestOutcome {
    /// Header followed by one message per ranked article
    Ready(Vec<OutboundMessage>),
    /// Every source failed or returned nothing
    NoNews,
}

/// Something that can produce a digest on demand
#[async_trait]
pub trait NewsPipeline: Send + Sync {
    async fn run(&self) -> DigestOutcome;
}

/// Pipeline backed by a [`NewsAggregator`]
pub struct DigestService {
    aggregator: NewsAggregator,
}

impl DigestService {
    pub fn new(aggregator: NewsAggregator) -> Self {
        Self { aggregator }
    }

    pub fn aggregator(&self) -> &NewsAggregator {
        &self.aggregator
    }
}

#[async_trait]
impl NewsPipeline for DigestService {
    #[instrument(skip(self))]
    async fn run(&self) -> DigestOutcome {
        let articles = self.aggregator.aggregate().await;

        if articles.is_empty() {
            info!("No articles available from any source");
            return DigestOutcome::NoNews;
        }

        info!("Built digest of {} articles", articles.len());
        DigestOutcome::Ready(format_digest(&articles))
    }
}
