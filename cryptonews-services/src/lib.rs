//! News pipeline services for the Crypto News Bot
//!
//! This crate turns configured sources into an ordered list of chat
//! messages: concurrent fetch, deduplication and ranking, summarization and
//! formatting. It also provides the pacing limiter used by chat transports.

pub mod digest_service;
pub mod formatter;
pub mod news_aggregator;
pub mod ranking;
pub mod rate_limiter;
pub mod summarizer;

pub use digest_service::{DigestOutcome, DigestService, NewsPipeline};
pub use formatter::{format_article, format_digest, format_header};
pub use news_aggregator::{AggregatorConfig, NewsAggregator};
pub use ranking::{dedup_by_title, process, MAX_RESULTS};
pub use rate_limiter::RateLimiter;
pub use summarizer::summarize;
