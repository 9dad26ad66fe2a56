//! Word-bounded article summaries

/// Texts up to this many words are returned unchanged
pub const MAX_SUMMARY_WORDS: usize = 50;

/// Words kept when a text is cut
pub const TRUNCATED_WORDS: usize = 47;

/// Marker appended to a cut summary
pub const ELLIPSIS: &str = "...";

/// Summarize an article as `"{title}. {description}"`, bounded to
/// [`MAX_SUMMARY_WORDS`] words.
///
/// Longer texts keep their first [`TRUNCATED_WORDS`] words, joined by single
/// spaces, followed by [`ELLIPSIS`].
pub fn summarize(title: &str, description: &str) -> String {
    let text = format!("{}. {}", title, description);

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= MAX_SUMMARY_WORDS {
        return text;
    }

    let mut summary = words[..TRUNCATED_WORDS].join(" ");
    summary.push_str(ELLIPSIS);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        (1..=n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_short_text_verbatim() {
        assert_eq!(
            summarize("Bitcoin rallies", "Price  tops\t$70k"),
            "Bitcoin rallies. Price  tops\t$70k"
        );
    }

    #[test]
    fn test_empty_description_kept_verbatim() {
        assert_eq!(summarize("Headline", ""), "Headline. ");
    }

    #[test]
    fn test_exactly_fifty_words_unmodified() {
        // "t1." + 49 description words = 50 words
        let description = words(49);
        let summary = summarize("t1", &description);
        assert_eq!(summary, format!("t1. {}", description));
        assert!(!summary.ends_with(ELLIPSIS));
        assert_eq!(summary.split_whitespace().count(), 50);
    }

    #[test]
    fn test_fifty_one_words_cut_to_forty_seven() {
        let description = words(50);
        let summary = summarize("t1", &description);

        assert!(summary.ends_with(ELLIPSIS));
        let body = summary.strip_suffix(ELLIPSIS).unwrap();
        let kept: Vec<&str> = body.split(' ').collect();
        assert_eq!(kept.len(), 47);
        assert_eq!(kept[0], "t1.");
        assert_eq!(kept[46], "w46");
    }

    #[test]
    fn test_cut_collapses_whitespace() {
        let description = words(60).replace(' ', "   ");
        let summary = summarize("Title", &description);
        assert!(!summary.contains("  "));
    }
}
