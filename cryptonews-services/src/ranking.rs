//! Deduplication and recency ranking

use std::collections::HashSet;

use cryptonews_core::Article;

/// Maximum articles handed downstream per pipeline run
pub const MAX_RESULTS: usize = 10;

/// Drop articles whose lower-cased title was already seen.
///
/// The first occurrence in input order wins.
pub fn dedup_by_title(articles: Vec<Article>) -> Vec<Article> {
    let mut seen_titles = HashSet::new();
    articles
        .into_iter()
        .filter(|article| seen_titles.insert(article.dedup_key()))
        .collect()
}

/// Sort newest first
pub fn rank_by_recency(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.published_at().cmp(&a.published_at()));
}

/// Deduplicate, rank and keep the newest `limit` articles
pub fn top_articles(articles: Vec<Article>, limit: usize) -> Vec<Article> {
    let mut unique = dedup_by_title(articles);
    rank_by_recency(&mut unique);
    unique.truncate(limit);
    unique
}

/// Deduplicate, rank and keep the newest [`MAX_RESULTS`] articles
pub fn process(articles: Vec<Article>) -> Vec<Article> {
    top_articles(articles, MAX_RESULTS)
}
