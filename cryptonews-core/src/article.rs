//! Normalized news article shared by every source

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length of an article description, in characters
pub const MAX_DESCRIPTION_CHARS: usize = 200;

/// A news article normalized from any source
///
/// Articles are immutable once built: the fields are only readable through
/// accessors, so the description bound set by [`Article::new`] always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ArticleRecord")]
pub struct Article {
    title: String,
    description: String,
    url: String,
    published_at: DateTime<Utc>,
    source_name: String,
}

impl Article {
    /// Build an article, truncating the description to
    /// [`MAX_DESCRIPTION_CHARS`] characters.
    pub fn new(
        title: impl Into<String>,
        description: impl AsRef<str>,
        url: impl Into<String>,
        published_at: DateTime<Utc>,
        source_name: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: truncate_chars(description.as_ref(), MAX_DESCRIPTION_CHARS),
            url: url.into(),
            published_at,
            source_name: source_name.into(),
        }
    }

    /// Article headline
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Short description (may be empty)
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Link to the full article
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Publication time, or fetch time when the source gave none
    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }

    /// Human-readable provenance label (e.g. "CoinDesk")
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Deduplication key: the full title, lower-cased
    pub fn dedup_key(&self) -> String {
        self.title.to_lowercase()
    }
}

/// Wire shape of [`Article`]; deserialization goes through [`Article::new`]
#[derive(Deserialize)]
struct ArticleRecord {
    title: String,
    description: String,
    url: String,
    published_at: DateTime<Utc>,
    source_name: String,
}

impl From<ArticleRecord> for Article {
    fn from(record: ArticleRecord) -> Self {
        Article::new(
            record.title,
            record.description,
            record.url,
            record.published_at,
            record.source_name,
        )
    }
}

/// Take at most `max` characters (not bytes) from `text`
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_truncated_to_200_chars() {
        let long = "é".repeat(250);
        let article = Article::new("Title", &long, "https://x.test", Utc::now(), "Test");
        assert_eq!(article.description().chars().count(), 200);
    }

    #[test]
    fn test_short_description_untouched() {
        let article = Article::new("Title", "short", "https://x.test", Utc::now(), "Test");
        assert_eq!(article.description(), "short");
    }

    #[test]
    fn test_dedup_key_is_lowercase_full_title() {
        let article = Article::new(
            "Bitcoin Hits $100k",
            "",
            "https://x.test",
            Utc::now(),
            "Test",
        );
        assert_eq!(article.dedup_key(), "bitcoin hits $100k");
    }

    #[test]
    fn test_serializes_to_json() {
        let article = Article::new("T", "D", "https://x.test", Utc::now(), "S");
        let json = serde_json::to_string(&article).unwrap();
        let back: Article = serde_json::from_str(&json).unwrap();
        assert_eq!(back, article);
    }

    #[test]
    fn test_deserialized_description_is_bounded() {
        let json = format!(
            r#"{{"title":"T","description":"{}","url":"https://x.test","published_at":"2025-06-10T14:03:00Z","source_name":"S"}}"#,
            "x".repeat(500)
        );
        let article: Article = serde_json::from_str(&json).unwrap();
        assert_eq!(article.description().chars().count(), MAX_DESCRIPTION_CHARS);
    }
}
