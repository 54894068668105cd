//! Word frequency counting.

use rustc_hash::FxHashMap;

/// Mapping from distinct word text to its occurrence count, plus the running
/// maximum count observed while building it.
///
/// Built in a single pass over a token sequence. `highest_frequency` is 0 for
/// an empty sequence, which downstream code relies on to size the bucket
/// array.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: FxHashMap<String, usize>,
    highest_frequency: usize,
}

impl FrequencyTable {
    /// Count occurrences of each distinct token in one pass.
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        let mut highest_frequency = 0;

        for token in tokens {
            let count = counts.entry(token).or_insert(0);
            *count += 1;
            if *count > highest_frequency {
                highest_frequency = *count;
            }
        }

        Self {
            counts,
            highest_frequency,
        }
    }

    /// The largest occurrence count in the table (0 when empty).
    #[inline]
    pub fn highest_frequency(&self) -> usize {
        self.highest_frequency
    }

    /// Occurrence count for `word`, if it was seen.
    pub fn count(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no tokens were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Consume the table, yielding `(word, count)` pairs in arbitrary order.
    pub fn into_entries(self) -> impl Iterator<Item = (String, usize)> {
        self.counts.into_iter()
    }
}
