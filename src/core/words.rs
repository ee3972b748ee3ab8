use crate::domain::model::WordCounts;
use regex::Regex;
use std::sync::LazyLock;

// Word characters plus apostrophes and hyphens, so "don't" and "well-known"
// stay whole while surrounding punctuation is dropped.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w'-]+").expect("token pattern is valid"));

/// Counts case-folded word tokens in `text`.
pub fn count_words(text: &str) -> WordCounts {
    let lowered = text.to_lowercase();
    let mut counts = WordCounts::new();
    for token in TOKEN.find_iter(&lowered) {
        *counts.entry(token.as_str().to_string()).or_insert(0) += 1;
    }
    tracing::debug!("Counted {} distinct tokens", counts.len());
    counts
}

/// The `n` most frequent tokens, highest count first. Ties are ordered
/// alphabetically so the result is deterministic.
pub fn most_common(counts: &WordCounts, n: usize) -> Vec<(&str, usize)> {
    let mut ranked: Vec<(&str, usize)> = counts
        .iter()
        .map(|(token, count)| (token.as_str(), *count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts_of(pairs: &[(&str, usize)]) -> WordCounts {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_count_words_folds_case_and_punctuation() {
        let counts = count_words("Oh what a day, oh what a lovely day!");
        assert_eq!(
            counts,
            counts_of(&[("oh", 2), ("what", 2), ("a", 2), ("day", 2), ("lovely", 1)])
        );
    }

    #[test]
    fn test_count_words_empty() {
        assert!(count_words("").is_empty());
        assert!(count_words("  ,.!?  ").is_empty());
    }

    #[test]
    fn test_count_words_keeps_apostrophes_and_hyphens() {
        let counts = count_words("Don't stop; don't. A well-known well-known fact");
        assert_eq!(counts["don't"], 2);
        assert_eq!(counts["well-known"], 2);
        assert_eq!(counts["stop"], 1);
    }

    #[test]
    fn test_count_words_rejects_whitespace_split() {
        // Splitting on whitespace alone would count "day," and "day!" separately
        // and keep "Oh" apart from "oh".
        let counts = count_words("Oh day, oh day!");
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["oh"], 2);
        assert_eq!(counts["day"], 2);
    }

    #[test]
    fn test_count_words_adjacent_punctuation() {
        // Stripping only a leading character would drop "(hello" entirely.
        let counts = count_words("(hello)...\"hello\" ;hello?!");
        assert_eq!(counts["hello"], 3);
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn test_most_common_orders_by_count_then_token() {
        let counts = count_words("b a c b a b");
        assert_eq!(most_common(&counts, 2), vec![("b", 3), ("a", 2)]);
        assert_eq!(most_common(&counts, 10).len(), 3);
        assert!(most_common(&counts, 0).is_empty());
    }
}
