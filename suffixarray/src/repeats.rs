use serde::Serialize;

use crate::index::SuffixArrayIndex;

/// A substring that occurs at least twice in the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RepeatedSubstring {
    /// Text position of the leftmost of the two adjacent occurrences
    pub position: usize,
    pub length: usize,
}

impl SuffixArrayIndex {
    /// Searches the longest substring that occurs at least twice in the text
    ///
    /// Two occurrences may overlap. When several substrings share the maximal length, the one
    /// belonging to the lowest rank is returned.
    ///
    /// # Returns
    ///
    /// Returns the repeated substring, or `None` if no symbol occurs twice
    pub fn longest_repeated_substring(&self) -> Option<RepeatedSubstring> {
        let mut best: Option<(usize, usize)> = None;
        for (rank, &length) in self.lcp.iter().enumerate() {
            if length > best.map_or(0, |(_, best_length)| best_length) {
                best = Some((rank, length));
            }
        }

        best.map(|(rank, length)| RepeatedSubstring {
            position: self.sa[rank].min(self.sa[rank + 1]),
            length,
        })
    }

    /// Returns the number of different non-empty substrings of the text
    pub fn distinct_substring_count(&self) -> usize {
        let text_length = self.len() - 1;
        let total: usize = self.sa.iter().map(|&suffix| text_length - suffix).sum();
        let shared: usize = self.lcp.iter().sum();
        total - shared
    }
}
