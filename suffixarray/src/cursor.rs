//! Incremental descent through the suffix array
//!
//! A pattern is matched one symbol at a time. The window of ranks that share the matched prefix
//! is narrowed with two binary searches on the symbol at the current offset, so every symbol costs
//! O(log n) and callers can follow the matches while a pattern is being typed.

use std::ops::RangeInclusive;

use serde::Serialize;
use suffixarray_builder::SENTINEL;

use crate::error::QueryError;
use crate::index::SuffixArrayIndex;

/// A closed range of ranks in the suffix array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankRange {
    pub first: usize,
    pub last: usize,
}

impl RankRange {
    pub fn new(first: usize, last: usize) -> Self {
        Self { first, last }
    }

    /// Number of ranks in the range
    pub fn len(&self) -> usize {
        self.last + 1 - self.first
    }

    /// A closed range always holds at least one rank
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn ranks(&self) -> RangeInclusive<usize> {
        self.first..=self.last
    }
}

/// Result of narrowing a rank range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSearchResult {
    NoMatches,
    SearchResult(RankRange),
}

impl RangeSearchResult {
    /// Returns the matching range, or `None` if nothing matched
    pub fn range(&self) -> Option<RankRange> {
        match *self {
            RangeSearchResult::NoMatches => None,
            RangeSearchResult::SearchResult(range) => Some(range),
        }
    }
}

/// Outcome of feeding one symbol to a `SearchCursor`
#[derive(Debug, PartialEq)]
pub enum CursorIterator {
    Ok,
    NoMatch,
}

/// Cursor that narrows the matching ranks one pattern symbol at a time
pub struct SearchCursor<'a> {
    index: &'a SuffixArrayIndex,
    range: Option<RankRange>,
    depth: usize,
}

impl<'a> SearchCursor<'a> {
    pub fn new(index: &'a SuffixArrayIndex) -> SearchCursor<'a> {
        Self {
            index,
            range: Some(index.full_range()),
            depth: 0,
        }
    }

    /// Extends the matched prefix with `symbol`
    ///
    /// Once a symbol did not match, every following call returns `NoMatch` until `reset` is called.
    pub fn next(&mut self, symbol: u8) -> CursorIterator {
        let Some(range) = self.range else {
            return CursorIterator::NoMatch;
        };

        match self.index.narrow(range, self.depth, symbol) {
            RangeSearchResult::SearchResult(narrowed) => {
                self.range = Some(narrowed);
                self.depth += 1;
                CursorIterator::Ok
            }
            RangeSearchResult::NoMatches => {
                self.range = None;
                CursorIterator::NoMatch
            }
        }
    }

    /// The ranks of all suffixes that start with the symbols given so far
    pub fn result(&self) -> RangeSearchResult {
        match self.range {
            Some(range) => RangeSearchResult::SearchResult(range),
            None => RangeSearchResult::NoMatches,
        }
    }

    /// The current window, `None` once a symbol failed to match
    pub fn range(&self) -> Option<RankRange> {
        self.range
    }

    /// Number of symbols matched so far
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn reset(&mut self) {
        self.range = Some(self.index.full_range());
        self.depth = 0;
    }
}

impl SuffixArrayIndex {
    /// Creates a cursor positioned before the first symbol of a pattern
    pub fn cursor(&self) -> SearchCursor<'_> {
        SearchCursor::new(self)
    }

    /// Narrows `range` to the suffixes that have `symbol` at `offset`
    ///
    /// All suffixes in `range` are expected to share their first `offset` symbols, which makes
    /// the symbol at `offset` non-decreasing over the range. A suffix that ends before `offset`
    /// sorts before every symbol.
    pub(crate) fn narrow(&self, range: RankRange, offset: usize, symbol: u8) -> RangeSearchResult {
        // the sentinel is not part of the searchable text
        if symbol == SENTINEL {
            return RangeSearchResult::NoMatches;
        }

        let window = &self.sa[range.ranks()];
        let symbol_at = |suffix: usize| self.text.symbol_at(suffix + offset);

        let lower = window.partition_point(|&suffix| symbol_at(suffix) < Some(symbol));
        if lower == window.len() || symbol_at(window[lower]) != Some(symbol) {
            return RangeSearchResult::NoMatches;
        }
        let upper = window.partition_point(|&suffix| symbol_at(suffix) <= Some(symbol));

        RangeSearchResult::SearchResult(RankRange::new(
            range.first + lower,
            range.first + upper - 1,
        ))
    }

    /// Narrows `range` to the suffixes whose symbol at `offset` equals `symbol`
    ///
    /// # Arguments
    /// * `range` - The ranks of the suffixes that matched the first `offset` symbols of a pattern
    /// * `offset` - Position of `symbol` in the pattern
    /// * `symbol` - The next symbol of the pattern
    ///
    /// # Returns
    ///
    /// Returns the narrowed range, or `NoMatches` if no suffix in `range` continues with `symbol`
    ///
    /// # Errors
    ///
    /// Returns `QueryError::OutOfRange` if `range` reaches past the last rank
    pub fn advance(
        &self,
        range: RankRange,
        offset: usize,
        symbol: u8,
    ) -> Result<RangeSearchResult, QueryError> {
        if range.last >= self.len() {
            return Err(QueryError::OutOfRange {
                index: range.last,
                len: self.len(),
            });
        }
        if range.first > range.last {
            return Ok(RangeSearchResult::NoMatches);
        }
        Ok(self.narrow(range, offset, symbol))
    }

    /// Searches the ranks of all suffixes that start with `pattern`, one symbol at a time
    ///
    /// # Arguments
    /// * `pattern` - The pattern we are searching, the empty pattern matches every suffix
    ///
    /// # Returns
    ///
    /// Returns the closed range of matching ranks, or `NoMatches` as soon as a symbol fails
    pub fn match_pattern(&self, pattern: &[u8]) -> RangeSearchResult {
        let mut cursor = self.cursor();
        for &symbol in pattern {
            if cursor.next(symbol) == CursorIterator::NoMatch {
                return RangeSearchResult::NoMatches;
            }
        }
        cursor.result()
    }
}
