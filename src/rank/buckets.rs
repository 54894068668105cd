//! Pigeonhole buckets for linear-time top-N selection.
//!
//! Frequencies are used directly as array indices instead of feeding a
//! comparison sort: bucket `i` holds every distinct word whose occurrence
//! count is `i + 1`, and selection scans buckets from the top index down.
//! This trades O(max frequency) memory for O(w + b) selection, where w is the
//! distinct-word count and b the bucket count.

use rustc_hash::FxHashSet;

use super::frequency::FrequencyTable;

/// Distinct words grouped by occurrence count.
///
/// Invariants: the array length equals the highest observed frequency (0 for
/// an empty table), and every word from the source table appears in exactly
/// one bucket, at index `count - 1`.
#[derive(Debug, Clone, Default)]
pub struct FrequencyBuckets {
    buckets: Vec<FxHashSet<String>>,
}

impl FrequencyBuckets {
    /// Group every entry of `table` into its frequency bucket.
    pub fn from_table(table: FrequencyTable) -> Self {
        let mut buckets: Vec<FxHashSet<String>> = Vec::new();
        buckets.resize_with(table.highest_frequency(), FxHashSet::default);

        for (word, count) in table.into_entries() {
            buckets[count - 1].insert(word);
        }

        Self { buckets }
    }

    /// Number of buckets (equals the highest observed frequency).
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `true` if there are no buckets (no tokens were counted).
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// The set of words occurring exactly `frequency` times, if any bucket
    /// exists at that frequency.
    pub fn words_with_frequency(&self, frequency: usize) -> Option<&FxHashSet<String>> {
        frequency
            .checked_sub(1)
            .and_then(|i| self.buckets.get(i))
    }

    /// Select up to `n` words by descending frequency.
    ///
    /// Scans from the highest bucket down, stopping as soon as the result is
    /// full. Order among words sharing a bucket follows the set's iteration
    /// order and is not guaranteed stable across inputs. When the buckets run
    /// out first, the shorter result is returned as-is, with no padding.
    pub fn into_top_n(self, n: usize) -> Vec<String> {
        let mut result = Vec::with_capacity(n.min(self.buckets.len()));

        for bucket in self.buckets.into_iter().rev() {
            for word in bucket {
                if result.len() == n {
                    return result;
                }
                result.push(word);
            }
        }

        result
    }
}
