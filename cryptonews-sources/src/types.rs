//! NewsAPI wire types

use serde::Deserialize;

/// NewsAPI `/v2/everything` response envelope
#[derive(Debug, Deserialize)]
pub struct NewsApiResponse {
    /// `"ok"` or `"error"`
    pub status: String,
    /// Error code when `status` is `"error"`
    #[serde(default)]
    pub code: Option<String>,
    /// Error message when `status` is `"error"`
    #[serde(default)]
    pub message: Option<String>,
    /// Matching articles
    #[serde(default)]
    pub articles: Vec<NewsApiArticle>,
}

/// A single NewsAPI article
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsApiArticle {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    /// ISO 8601, usually with a `Z` suffix
    pub published_at: String,
    #[serde(default)]
    pub source: Option<NewsApiSource>,
}

/// Publisher of a NewsAPI article
#[derive(Debug, Deserialize)]
pub struct NewsApiSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}
