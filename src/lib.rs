//! Linear-time top-N word frequency extraction.
//!
//! `rapid-topwords` extracts the N most frequent words from a text blob in
//! two stages:
//!
//! 1. **Tokenize** — a single-pass character-class scanner splits the input
//!    into maximal runs of ASCII letters ([`nlp::AsciiWordTokenizer`]). Any
//!    tokenizer can be substituted through the [`nlp::Tokenizer`] trait.
//! 2. **Rank** — one pass counts word frequencies, then pigeonhole buckets
//!    (one bucket per observed frequency) are scanned from the top down to
//!    select the result ([`rank::TopWordsRanker`]). No comparison sort: with
//!    w distinct words and b buckets, selection is O(w + b), and b is bounded
//!    by the token count, so the whole routine is bounded by the O(n)
//!    tokenization pass.
//!
//! Words tied on frequency come back in an implementation-defined order.
//!
//! # Quick start
//!
//! ```
//! let top = rapid_topwords::top_n_words("a a a a b b b c c d e f", 3);
//! assert_eq!(top, vec!["a", "b", "c"]);
//! ```
//!
//! Inputs that arrive from outside the type system (missing content, signed
//! counts) go through [`request::TopWordsRequest`], which validates before
//! ranking.
//!
//! # Feature flags
//!
//! - `tracing` — per-stage debug events inside the ranker. Off by default;
//!   compiles to nothing when disabled.

pub mod error;
pub mod nlp;
pub mod rank;
pub mod request;

pub use error::TopWordsError;
pub use nlp::{AsciiWordTokenizer, Tokenizer};
pub use rank::TopWordsRanker;
pub use request::TopWordsRequest;

/// Return up to `n` distinct words from `content` by descending frequency,
/// using the default ASCII word tokenizer.
pub fn top_n_words(content: &str, n: usize) -> Vec<String> {
    TopWordsRanker::new().top_n_words(content, n)
}
