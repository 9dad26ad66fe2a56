//! News source configuration
//!
//! A [`SourceSpec`] is declared once at startup. Specs are resolved against the
//! configured credentials into [`ActiveSource`]s before any fetch happens, so
//! the fetch loop never has to decide whether a source should run.

use serde::{Deserialize, Serialize};

/// Kind of a news source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    /// RSS or Atom syndication feed
    Feed,
    /// REST API that needs an API key in the query string
    KeyedApi,
}

/// Static definition of a news source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpec {
    /// Human-readable name (e.g. "CoinDesk")
    pub name: String,
    /// Feed URL or API query template
    pub endpoint: String,
    /// How the endpoint is fetched and parsed
    pub kind: SourceKind,
}

impl SourceSpec {
    pub fn new(name: &str, endpoint: &str, kind: SourceKind) -> Self {
        Self {
            name: name.to_string(),
            endpoint: endpoint.to_string(),
            kind,
        }
    }

    pub fn feed(name: &str, endpoint: &str) -> Self {
        Self::new(name, endpoint, SourceKind::Feed)
    }

    pub fn keyed_api(name: &str, endpoint: &str) -> Self {
        Self::new(name, endpoint, SourceKind::KeyedApi)
    }
}

/// A source that will actually be fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSource {
    spec: SourceSpec,
    api_key: Option<String>,
}

impl ActiveSource {
    pub fn spec(&self) -> &SourceSpec {
        &self.spec
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn kind(&self) -> SourceKind {
        self.spec.kind
    }

    /// API key for [`SourceKind::KeyedApi`] sources; always `None` for feeds
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

/// Resolve source specs into the list of sources to fetch.
///
/// Feeds are always active. Keyed API sources are active only when an API key
/// is configured; otherwise they are dropped here and never attempted.
pub fn resolve_active_sources(specs: &[SourceSpec], api_key: Option<&str>) -> Vec<ActiveSource> {
    let api_key = api_key.map(str::trim).filter(|key| !key.is_empty());

    specs
        .iter()
        .filter_map(|spec| match spec.kind {
            SourceKind::Feed => Some(ActiveSource {
                spec: spec.clone(),
                api_key: None,
            }),
            SourceKind::KeyedApi => api_key.map(|key| ActiveSource {
                spec: spec.clone(),
                api_key: Some(key.to_string()),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs() -> Vec<SourceSpec> {
        vec![
            SourceSpec::feed("CoinDesk", "https://coindesk.test/rss"),
            SourceSpec::keyed_api("NewsAPI", "https://newsapi.test/v2/everything"),
            SourceSpec::feed("CryptoPanic", "https://cryptopanic.test/rss"),
        ]
    }

    #[test]
    fn test_keyed_source_dropped_without_key() {
        let active = resolve_active_sources(&specs(), None);
        let names: Vec<&str> = active.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["CoinDesk", "CryptoPanic"]);
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let active = resolve_active_sources(&specs(), Some("   "));
        assert!(active.iter().all(|s| s.kind() == SourceKind::Feed));
    }

    #[test]
    fn test_keyed_source_carries_key() {
        let active = resolve_active_sources(&specs(), Some("secret"));
        assert_eq!(active.len(), 3);
        let keyed = active
            .iter()
            .find(|s| s.kind() == SourceKind::KeyedApi)
            .unwrap();
        assert_eq!(keyed.api_key(), Some("secret"));
        assert_eq!(active[0].api_key(), None);
    }

    #[test]
    fn test_resolution_keeps_configured_order() {
        let active = resolve_active_sources(&specs(), Some("k"));
        let names: Vec<&str> = active.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["CoinDesk", "NewsAPI", "CryptoPanic"]);
    }
}
