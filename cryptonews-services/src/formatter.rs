//! Chat message formatting
//!
//! Text uses Telegram's legacy Markdown (`*bold*`). Anything taken from an
//! article is escaped so a stray `_` or `*` in a headline cannot break
//! parsing of the whole message.

use cryptonews_core::{Article, OutboundMessage};

use crate::summarizer::summarize;

/// Shown while a pipeline run is in progress
pub const LOADING_TEXT: &str = "🔄 Fetching latest crypto news...";

/// Shown when no source returned anything
pub const NO_NEWS_TEXT: &str =
    "❌ Sorry, couldn't fetch news at the moment. Please try again later.";

/// Shown when the pipeline or delivery failed unexpectedly
pub const ERROR_TEXT: &str = "❌ An error occurred while fetching news. Please try again later.";

/// Caption of the per-article link button
pub const READ_MORE_LABEL: &str = "📖 Read Full Article";

/// Reply to `/start`
pub const WELCOME_TEXT: &str = "🚀 *Crypto News Bot* 🚀

Get the latest crypto news in bite-sized summaries!

*Commands:*
• /news - Get top 10 crypto news stories
• /help - Show this help message

Each story is summarized in under 50 words with a link to the full article.";

/// Reply to `/help`
pub const HELP_TEXT: &str = "📱 *How to use this bot:*

• Send /news to get the latest crypto news
• Each story is summarized in under 50 words
• Click the link to read the full article
• News is updated from multiple crypto sources

*Available commands:*
• /start - Welcome message
• /news - Get latest news
• /help - Show this message";

const RULE_WIDTH: usize = 40;

/// Escape characters that legacy Markdown treats as markup
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Header announcing how many stories follow
pub fn format_header(count: usize) -> OutboundMessage {
    OutboundMessage::text(format!(
        "📰 *Top {} Crypto News Stories*\n{}",
        count,
        "─".repeat(RULE_WIDTH)
    ))
}

/// One ranked article: summary, attribution and a link button
pub fn format_article(article: &Article, summary: &str, rank: usize) -> OutboundMessage {
    let text = format!(
        "*{}.* {}\n\n🔗 Source: {}",
        rank,
        escape_markdown(summary),
        escape_markdown(article.source_name())
    );

    OutboundMessage::text(text)
        .with_link(READ_MORE_LABEL, article.url())
        .without_preview()
}

/// Header followed by one message per article, ranks starting at 1
pub fn format_digest(articles: &[Article]) -> Vec<OutboundMessage> {
    let mut messages = Vec::with_capacity(articles.len() + 1);
    messages.push(format_header(articles.len()));

    for (i, article) in articles.iter().enumerate() {
        let summary = summarize(article.title(), article.description());
        messages.push(format_article(article, &summary, i + 1));
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn article(title: &str, source: &str) -> Article {
        Article::new(title, "Short body", "https://news.test/a", Utc::now(), source)
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("a_b*c`d[e]"), "a\\_b\\*c\\`d\\[e]");
        assert_eq!(escape_markdown("plain $100k"), "plain $100k");
    }

    #[test]
    fn test_header_counts_articles() {
        let header = format_header(7);
        assert!(header.text.starts_with("📰 *Top 7 Crypto News Stories*"));
        assert!(header.text.ends_with(&"─".repeat(40)));
        assert!(header.link_button.is_none());
    }

    #[test]
    fn test_article_message() {
        let a = article("Bitcoin Hits $100k", "CoinDesk");
        let msg = format_article(&a, "Bitcoin Hits $100k. Short body", 3);

        assert_eq!(
            msg.text,
            "*3.* Bitcoin Hits $100k. Short body\n\n🔗 Source: CoinDesk"
        );
        let button = msg.link_button.unwrap();
        assert_eq!(button.label, READ_MORE_LABEL);
        assert_eq!(button.url, "https://news.test/a");
        assert!(msg.suppress_link_preview);
    }

    #[test]
    fn test_article_text_is_escaped() {
        let a = article("snake_case_coin pumps", "Crypto_Panic");
        let msg = format_article(&a, "snake_case_coin pumps", 1);
        assert!(msg.text.contains("snake\\_case\\_coin"));
        assert!(msg.text.contains("Crypto\\_Panic"));
    }

    #[test]
    fn test_digest_is_header_then_ranked_articles() {
        let articles = vec![article("First", "A"), article("Second", "B")];
        let messages = format_digest(&articles);

        assert_eq!(messages.len(), 3);
        assert!(messages[0].text.contains("Top 2"));
        assert!(messages[1].text.starts_with("*1.* First. Short body"));
        assert!(messages[2].text.starts_with("*2.* Second. Short body"));
    }
}
