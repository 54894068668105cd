//! Top-N word ranking.
//!
//! [`TopWordsRanker`] wires the stages together: tokenize, count frequencies,
//! group into pigeonhole buckets, select from the top bucket down. Each stage
//! is a single linear pass, so the whole routine is bounded by the O(n)
//! tokenization of the input.

pub mod buckets;
pub mod frequency;

pub use buckets::FrequencyBuckets;
pub use frequency::FrequencyTable;

use crate::nlp::tokenizer::{AsciiWordTokenizer, Tokenizer};

/// Extracts the N most frequent words from a text blob.
///
/// Generic over the tokenization capability, so alternative tokenizers can be
/// substituted without touching the ranking stages. The ranker holds no
/// per-call state; a shared instance is safe across concurrent callers.
///
/// ```
/// use rapid_topwords::rank::TopWordsRanker;
///
/// let ranker = TopWordsRanker::new();
/// let top = ranker.top_n_words("a a a a b b b c c d e f", 3);
/// assert_eq!(top, vec!["a", "b", "c"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TopWordsRanker<T = AsciiWordTokenizer> {
    tokenizer: T,
}

impl TopWordsRanker {
    /// Ranker backed by the default [`AsciiWordTokenizer`].
    pub fn new() -> Self {
        Self {
            tokenizer: AsciiWordTokenizer,
        }
    }
}

impl<T: Tokenizer> TopWordsRanker<T> {
    /// Ranker backed by a custom tokenization capability.
    pub fn with_tokenizer(tokenizer: T) -> Self {
        Self { tokenizer }
    }

    /// Return up to `n` distinct words by descending frequency.
    ///
    /// Words tied on frequency come back in an implementation-defined order.
    /// Token-free content yields an empty result regardless of `n`, and `n`
    /// larger than the distinct-word count returns all distinct words.
    pub fn top_n_words(&self, content: &str, n: usize) -> Vec<String> {
        let tokens = self.tokenizer.tokenize(content);
        #[cfg(feature = "tracing")]
        tracing::debug!(tokens = tokens.len(), "tokenized content");

        let table = FrequencyTable::from_tokens(tokens);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            distinct = table.len(),
            highest_frequency = table.highest_frequency(),
            "built frequency table"
        );

        let result = FrequencyBuckets::from_table(table).into_top_n(n);
        #[cfg(feature = "tracing")]
        tracing::debug!(selected = result.len(), requested = n, "selected top words");

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_strictly_decreasing_frequencies_give_exact_order() {
        let ranker = TopWordsRanker::new();
        assert_eq!(
            ranker.top_n_words("a a a a b b b c c d e f", 3),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_ties_return_correct_words_in_any_order() {
        let ranker = TopWordsRanker::new();
        let top = ranker.top_n_words("a a a a b b b b c c c c", 3);

        assert_eq!(top.len(), 3);
        let distinct: FxHashSet<&str> = top.iter().map(String::as_str).collect();
        assert_eq!(distinct.len(), 3);
        for word in &top {
            assert!(["a", "b", "c"].contains(&word.as_str()));
        }
    }

    #[test]
    fn test_n_above_distinct_count_returns_everything() {
        let ranker = TopWordsRanker::new();
        let top = ranker.top_n_words("a a a a b b b c c d e f", 100);

        // Six distinct words: a(4), b(3), c(2), then d/e/f tied at 1.
        assert_eq!(top.len(), 6);
        assert_eq!(&top[..3], ["a", "b", "c"]);
        let mut tail: Vec<&str> = top[3..].iter().map(String::as_str).collect();
        tail.sort_unstable();
        assert_eq!(tail, ["d", "e", "f"]);
    }

    #[test]
    fn test_single_word_input() {
        let ranker = TopWordsRanker::new();
        assert_eq!(
            ranker.top_n_words("a a a a a a a a a a a a", 100),
            vec!["a"]
        );
    }

    #[test]
    fn test_zero_n_yields_empty() {
        let ranker = TopWordsRanker::new();
        assert!(ranker.top_n_words("a a a a b b b c c d e f", 0).is_empty());
    }

    #[test]
    fn test_token_free_content_yields_empty() {
        let ranker = TopWordsRanker::new();
        assert!(ranker.top_n_words("", 3).is_empty());
        assert!(ranker.top_n_words("     ", 3).is_empty());
        assert!(ranker.top_n_words("!@# #$% ^&* ()", 3).is_empty());
    }

    #[test]
    fn test_idempotent_for_identical_arguments() {
        let ranker = TopWordsRanker::new();
        let first = ranker.top_n_words("the quick brown fox the lazy dog the fox", 4);
        let second = ranker.top_n_words("the quick brown fox the lazy dog the fox", 4);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_tokenizer_substitution() {
        struct WhitespaceTokenizer;

        impl Tokenizer for WhitespaceTokenizer {
            fn tokenize(&self, content: &str) -> Vec<String> {
                content.split_whitespace().map(str::to_string).collect()
            }
        }

        let ranker = TopWordsRanker::with_tokenizer(WhitespaceTokenizer);
        // The whitespace tokenizer keeps "U.S.A." as one token.
        assert_eq!(ranker.top_n_words("U.S.A. U.S.A. ok", 1), vec!["U.S.A."]);
    }
}
