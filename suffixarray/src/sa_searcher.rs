use std::cmp::{min, Ordering};

use crate::index::SuffixArrayIndex;

/// Enum representing the minimum and maximum bound of the found matches in the suffix array
///
/// The bounds are half open: the matching suffixes have ranks `min..max`.
#[derive(PartialEq, Debug)]
pub enum BoundSearchResult {
    NoMatches,
    SearchResult((usize, usize)),
}

/// Enum representing the matching suffixes after searching a pattern in the suffix array
/// Both the MaxMatches and SearchResult indicate found suffixes, but MaxMatches is used when the cutoff is reached.
/// The text positions are sorted in ascending order.
#[derive(PartialEq, Debug)]
pub enum SearchAllSuffixesResult {
    NoMatches,
    MaxMatches(Vec<usize>),
    SearchResult(Vec<usize>),
}

/// One page of a multi-pattern search
#[derive(PartialEq, Debug)]
pub struct PatternsPage {
    /// The occurrences of every pattern on this page, in ascending order
    pub matches: Vec<Vec<usize>>,
    /// Text position where the next page starts, `None` if this is the last page
    pub next_offset: Option<usize>,
}

impl SuffixArrayIndex {
    /// Compares the `suffix` to the `search_string`
    /// Only the first `search_string.len()` symbols of the suffix are compared and the sentinel is left out,
    /// so a suffix that starts with `search_string` compares as equal
    ///
    /// # Arguments
    /// * `suffix` - The text position of the suffix we are comparing with in the binary search
    /// * `search_string` - The pattern being searched in the suffix array
    ///
    /// # Returns
    ///
    /// Returns the ordering of the truncated suffix relative to `search_string`
    fn compare(&self, suffix: usize, search_string: &[u8]) -> Ordering {
        let text = self.text.raw();
        let end = min(text.len(), suffix + search_string.len());
        text[suffix..end].cmp(search_string)
    }

    /// Searches the first rank whose suffix is not smaller than `search_string`
    ///
    /// Rank 0 holds the suffix that only consists of the sentinel. It can never start with a
    /// non-empty pattern and is left out of the search. The empty pattern is a prefix of every
    /// suffix, the sentinel suffix included, so its lower boundary is 0.
    ///
    /// # Arguments
    /// * `search_string` - The pattern we are searching in the suffix array
    ///
    /// # Returns
    ///
    /// Returns the smallest rank in `1..len` where the suffix, truncated to the length of
    /// `search_string`, is `>= search_string`, or `len` if there is no such rank
    pub fn lower_boundary(&self, search_string: &[u8]) -> usize {
        if search_string.is_empty() {
            return 0;
        }
        1 + self.sa[1..]
            .partition_point(|&suffix| self.compare(suffix, search_string) == Ordering::Less)
    }

    /// Searches the first rank whose suffix is larger than `search_string`
    ///
    /// # Arguments
    /// * `search_string` - The pattern we are searching in the suffix array
    ///
    /// # Returns
    ///
    /// Returns the smallest rank in `1..len` where the suffix, truncated to the length of
    /// `search_string`, is `> search_string`, or `len` if there is no such rank
    pub fn upper_boundary(&self, search_string: &[u8]) -> usize {
        1 + self.sa[1..]
            .partition_point(|&suffix| self.compare(suffix, search_string) != Ordering::Greater)
    }

    /// Searches for the minimum and maximum bound for a string in the suffix array
    ///
    /// # Arguments
    /// * `search_string` - The pattern we are searching in the suffix array
    ///
    /// # Returns
    ///
    /// Returns the minimum and maximum bound of all matches in the suffix array, or `NoMatches` if no matches were found
    pub fn search_bounds(&self, search_string: &[u8]) -> BoundSearchResult {
        let min_bound = self.lower_boundary(search_string);
        let max_bound = self.upper_boundary(search_string);

        if min_bound < max_bound {
            BoundSearchResult::SearchResult((min_bound, max_bound))
        } else {
            BoundSearchResult::NoMatches
        }
    }

    /// Returns the number of occurrences of `search_string` in the text
    pub fn count(&self, search_string: &[u8]) -> usize {
        self.upper_boundary(search_string) - self.lower_boundary(search_string)
    }

    /// Returns the text positions of all occurrences of `search_string`, sorted ascending
    pub fn locate(&self, search_string: &[u8]) -> Vec<usize> {
        match self.search_matching_suffixes(search_string, usize::MAX) {
            SearchAllSuffixesResult::NoMatches => vec![],
            SearchAllSuffixesResult::MaxMatches(positions) => positions,
            SearchAllSuffixesResult::SearchResult(positions) => positions,
        }
    }

    /// Searches for the suffixes matching a search string
    ///
    /// # Arguments
    /// * `search_string` - The pattern we are searching in the suffix array
    /// * `max_matches` - The maximum amount of matches processed, if more matches are found we don't process them
    ///
    /// # Returns
    ///
    /// Returns the text positions of the matching suffixes. When the cutoff is reached only the
    /// suffixes with the lowest ranks are returned.
    pub fn search_matching_suffixes(
        &self,
        search_string: &[u8],
        max_matches: usize,
    ) -> SearchAllSuffixesResult {
        let BoundSearchResult::SearchResult((min_bound, max_bound)) =
            self.search_bounds(search_string)
        else {
            return SearchAllSuffixesResult::NoMatches;
        };

        let cutoff_used = max_bound - min_bound > max_matches;
        let last_processed = if cutoff_used {
            min_bound + max_matches
        } else {
            max_bound
        };

        let mut matching_suffixes = self.sa[min_bound..last_processed].to_vec();
        matching_suffixes.sort_unstable();

        if cutoff_used {
            SearchAllSuffixesResult::MaxMatches(matching_suffixes)
        } else {
            SearchAllSuffixesResult::SearchResult(matching_suffixes)
        }
    }

    /// Searches a set of patterns at once and reports one page of occurrences in text order
    ///
    /// Only occurrences that start at or after `from` are considered. Of those, about `page_size`
    /// occurrences with the lowest text positions are kept, the pattern order decides between
    /// patterns that occur at the same position. A page never splits the occurrences at one
    /// position: when the cut falls inside such a group the whole group moves to the next page,
    /// unless it is the only group on the page. Empty patterns never report an occurrence.
    ///
    /// # Arguments
    /// * `search_strings` - The patterns we are searching
    /// * `from` - The first text position that is reported
    /// * `page_size` - The number of occurrences, over all patterns, after which the page is cut
    ///
    /// # Returns
    ///
    /// Returns, for every pattern in `search_strings`, its kept occurrences in ascending order,
    /// together with the `from` of the next page (`None` when nothing is left)
    pub fn search_patterns(
        &self,
        search_strings: &[&[u8]],
        from: usize,
        page_size: usize,
    ) -> PatternsPage {
        let mut occurrences: Vec<(usize, usize)> = vec![];
        for (pattern_index, search_string) in search_strings.iter().enumerate() {
            if search_string.is_empty() {
                continue;
            }
            if let BoundSearchResult::SearchResult((min_bound, max_bound)) =
                self.search_bounds(search_string)
            {
                occurrences.extend(
                    self.sa[min_bound..max_bound]
                        .iter()
                        .filter(|&&position| position >= from)
                        .map(|&position| (position, pattern_index)),
                );
            }
        }

        occurrences.sort_unstable();

        let mut end = min(page_size, occurrences.len());
        if end < occurrences.len() {
            let cut_position = occurrences[end].0;
            let group_start =
                occurrences[..end].partition_point(|&(position, _)| position < cut_position);
            end = if group_start > 0 {
                group_start
            } else {
                occurrences.partition_point(|&(position, _)| position <= cut_position)
            };
        }
        let next_offset = occurrences.get(end).map(|&(position, _)| position);
        occurrences.truncate(end);

        let mut matches = vec![vec![]; search_strings.len()];
        for (position, pattern_index) in occurrences {
            matches[pattern_index].push(position);
        }
        PatternsPage {
            matches,
            next_offset,
        }
    }
}
