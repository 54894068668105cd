//! Request boundary for untrusted inputs.
//!
//! [`TopWordsRequest`] fronts the ranker for callers whose arguments arrive
//! from outside the type system — a JSON body, a form field — where content
//! may be missing and the requested count may be negative. Validation is
//! fail-fast: both checks run before any tokenization, and nothing is
//! partially built on failure.

use serde::{Deserialize, Serialize};

use crate::error::TopWordsError;
use crate::rank::TopWordsRanker;

/// A top-N-words request with not-yet-validated arguments.
///
/// ```
/// use rapid_topwords::request::TopWordsRequest;
///
/// let request = TopWordsRequest::new("a a a a b b b c c", 2);
/// assert_eq!(request.execute().unwrap(), vec!["a", "b"]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopWordsRequest {
    /// The text to rank. Absent content fails validation; an empty string is
    /// valid and yields an empty result.
    #[serde(default)]
    pub content: Option<String>,

    /// How many words to return. Negative values fail validation; 0 is valid
    /// and yields an empty result.
    pub n: i64,
}

impl TopWordsRequest {
    /// Request with content present.
    pub fn new(content: impl Into<String>, n: i64) -> Self {
        Self {
            content: Some(content.into()),
            n,
        }
    }

    /// Check the arguments without running anything.
    ///
    /// Content presence is checked before the count, matching the order the
    /// arguments are declared.
    pub fn validate(&self) -> Result<(), TopWordsError> {
        if self.content.is_none() {
            return Err(TopWordsError::MissingContent);
        }
        if self.n < 0 {
            return Err(TopWordsError::NegativeCount { n: self.n });
        }
        Ok(())
    }

    /// Validate, then rank with the default tokenizer.
    pub fn execute(&self) -> Result<Vec<String>, TopWordsError> {
        self.validate()?;

        // validate() guarantees content is present and n is non-negative.
        let content = self.content.as_deref().unwrap_or_default();
        let ranker = TopWordsRanker::new();
        Ok(ranker.top_n_words(content, self.n as usize))
    }
}
