//! News source adapters for the crypto news bot
//!
//! This crate provides adapters for fetching news from:
//! - RSS/Atom feeds: crypto news outlets (always on)
//! - NewsAPI: keyed search API (optional, needs `NEWS_API_KEY`)

pub mod adapter;
pub mod catalog;
pub mod dates;
pub mod error;
pub mod feed;
pub mod news_api;
pub mod types;

pub use adapter::{http_client, SourceAdapter, DEFAULT_FETCH_TIMEOUT};
pub use catalog::default_sources;
pub use error::SourceError;
pub use feed::FeedAdapter;
pub use news_api::NewsApiAdapter;
