//! Built-in news sources

use cryptonews_core::SourceSpec;

/// NewsAPI query template; the adapter appends `apiKey`
pub const NEWS_API_ENDPOINT: &str = "https://newsapi.org/v2/everything?q=cryptocurrency%20OR%20bitcoin%20OR%20ethereum&sortBy=publishedAt&pageSize=20";

/// Sources fetched on every `/news` request, in tie-break order
pub fn default_sources() -> Vec<SourceSpec> {
    vec![
        SourceSpec::feed("CoinDesk", "https://www.coindesk.com/arc/outboundfeeds/rss/"),
        SourceSpec::feed("CryptoPanic", "https://cryptopanic.com/news/rss/"),
        SourceSpec::keyed_api("NewsAPI", NEWS_API_ENDPOINT),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryptonews_core::SourceKind;

    #[test]
    fn test_default_sources() {
        let sources = default_sources();
        assert_eq!(sources.len(), 3);
        assert!(sources.iter().any(|s| s.name == "CoinDesk"));
        assert_eq!(
            sources
                .iter()
                .filter(|s| s.kind == SourceKind::KeyedApi)
                .count(),
            1
        );
    }

    #[test]
    fn test_endpoints_are_valid_urls() {
        for source in default_sources() {
            assert!(url::Url::parse(&source.endpoint).is_ok(), "{}", source.name);
        }
    }
}
