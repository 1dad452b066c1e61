//! Prefix doubling construction of the suffix array
//!
//! Every round doubles the length of the prefix by which the suffixes are ranked. The positions
//! are sorted on the pair (rank of the first half, rank of the second half) with two stable
//! counting sort passes, so a round takes O(n) and the whole construction O(n log n).

use std::cmp::max;

use tracing::debug;

use crate::sentinel::SentinelText;
use crate::ALPHABET_SIZE;

/// Number of buckets needed to sort the ranks of a text with length `n`
///
/// Ranks are either symbol values (first round) or dense ranks below `n` (later rounds). The last
/// bucket is reserved for the rank of a second half that lies beyond the end of the text.
pub fn bucket_capacity(n: usize) -> usize {
    max(n + 1, ALPHABET_SIZE) + 1
}

/// The result of ranking all suffixes of a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRanking {
    /// Text positions ordered by their suffix
    pub suffix_array: Vec<usize>,
    /// Rank of the suffix starting at each text position (inverse of `suffix_array`)
    pub rank_of: Vec<usize>,
}

/// Stable counting sort on bounded integer keys
///
/// The counters are reused between passes but belong to a single construction.
struct BucketSorter {
    counts: Vec<usize>,
}

impl BucketSorter {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: vec![0; capacity],
        }
    }

    /// Writes the items of `input` to `output`, stably sorted on `key`
    ///
    /// # Arguments
    /// * `input` - The items to sort
    /// * `output` - Receives the sorted items, must be as long as `input`
    /// * `key` - Maps an item to its bucket, must be smaller than the capacity of the sorter
    fn sort_by_key<F>(&mut self, input: &[usize], output: &mut [usize], key: F)
    where
        F: Fn(usize) -> usize,
    {
        self.counts.fill(0);
        for &item in input {
            self.counts[key(item)] += 1;
        }

        // turn the counts into the first output index of every bucket
        let mut start = 0;
        for count in self.counts.iter_mut() {
            let bucket_size = *count;
            *count = start;
            start += bucket_size;
        }

        for &item in input {
            let bucket = key(item);
            output[self.counts[bucket]] = item;
            self.counts[bucket] += 1;
        }
    }
}

/// Number of doubling rounds needed before the compared prefix covers the whole text
fn ceil_log2(n: usize) -> u32 {
    usize::BITS - n.saturating_sub(1).leading_zeros()
}

/// Ranks all suffixes of `text` with prefix doubling
///
/// # Arguments
/// * `text` - The text with sentinel on which the suffix array is built
///
/// # Returns
///
/// Returns the suffix array and the rank of every text position
pub fn rank_suffixes(text: &SentinelText) -> SuffixRanking {
    let symbols = text.as_bytes();
    let n = symbols.len();
    let capacity = bucket_capacity(n);
    let beyond_end = capacity - 1;

    let mut sorter = BucketSorter::with_capacity(capacity);
    let positions: Vec<usize> = (0..n).collect();
    let mut rank: Vec<usize> = symbols.iter().map(|&symbol| symbol as usize).collect();
    let mut second_half = vec![0; n];
    let mut by_second_half = vec![0; n];
    let mut order = positions.clone();
    let mut next_rank = vec![0; n];

    // a text with only the sentinel still needs one round to get dense ranks
    let rounds = max(ceil_log2(n), 1);
    for round in 1..=rounds {
        let half = 1usize << (round - 1);
        for i in 0..n {
            second_half[i] = if i + half < n { rank[i + half] } else { beyond_end };
        }

        sorter.sort_by_key(&positions, &mut by_second_half, |i| second_half[i]);
        sorter.sort_by_key(&by_second_half, &mut order, |i| rank[i]);

        next_rank[order[0]] = 0;
        for k in 1..n {
            let previous = order[k - 1];
            let current = order[k];
            next_rank[current] = if rank[previous] == rank[current]
                && second_half[previous] == second_half[current]
            {
                next_rank[previous]
            } else {
                next_rank[previous] + 1
            };
        }
        std::mem::swap(&mut rank, &mut next_rank);

        let distinct_ranks = rank[order[n - 1]] + 1;
        debug!(round, prefix_length = 2 * half, distinct_ranks, "ranking round finished");
        if distinct_ranks == n {
            break;
        }
    }

    SuffixRanking {
        suffix_array: order,
        rank_of: rank,
    }
}
