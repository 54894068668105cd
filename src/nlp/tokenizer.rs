//! Word tokenization.
//!
//! The [`Tokenizer`] trait is the seam between raw text and the ranking
//! stages: anything that turns a string into an ordered sequence of word
//! tokens can be plugged into [`TopWordsRanker`](crate::rank::TopWordsRanker).
//! The provided [`AsciiWordTokenizer`] is the default implementation.

/// Produces word tokens from raw text.
///
/// # Contract
///
/// - **Input**: the full content string (may be empty).
/// - **Output**: tokens in the order they appear in the input. An empty or
///   token-free input yields an empty vector, never an error.
/// - **Stateless**: implementations hold no per-call mutable state, so a
///   shared instance is safe across concurrent callers.
pub trait Tokenizer {
    /// Split `content` into an ordered sequence of word tokens.
    fn tokenize(&self, content: &str) -> Vec<String>;
}

/// Character-class tokenizer: a token is a maximal run of ASCII letters.
///
/// Every non-letter (digits, punctuation, whitespace, apostrophes) acts as a
/// separator and is discarded. Case is preserved exactly, so `"AWESOME"` and
/// `"awesome"` are distinct tokens.
///
/// ```
/// use rapid_topwords::nlp::tokenizer::{AsciiWordTokenizer, Tokenizer};
///
/// let tokens = AsciiWordTokenizer.tokenize("Father's car");
/// assert_eq!(tokens, vec!["Father", "s", "car"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiWordTokenizer;

impl Tokenizer for AsciiWordTokenizer {
    fn tokenize(&self, content: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut word = String::new();

        for c in content.chars() {
            if c.is_ascii_alphabetic() {
                word.push(c);
            } else if !word.is_empty() {
                tokens.push(std::mem::take(&mut word));
            }
        }

        // Input ending mid-word still emits the final token.
        if !word.is_empty() {
            tokens.push(word);
        }

        tokens
    }
}
