use get_size::GetSize;
use suffixarray_builder::error::BuildError;
use suffixarray_builder::sentinel::SentinelText;
use suffixarray_builder::{build_sa, BuiltSuffixArray};
use tracing::debug;

use crate::cursor::RankRange;
use crate::error::QueryError;

/// Read-only suffix array index over a single text
///
/// The index owns the text, the suffix array, its inverse and the LCP array. Nothing is changed
/// after construction, so an index can be shared between threads that only query it.
#[derive(GetSize, Debug, Clone, PartialEq, Eq)]
pub struct SuffixArrayIndex {
    pub(crate) text: SentinelText,
    pub(crate) sa: Vec<usize>,
    pub(crate) rank_of: Vec<usize>,
    pub(crate) lcp: Vec<usize>,
}

impl SuffixArrayIndex {
    /// Builds the index for `text`
    ///
    /// # Arguments
    /// * `text` - The text that will be searched, it may be empty
    ///
    /// # Returns
    ///
    /// Returns the finished index
    ///
    /// # Errors
    ///
    /// Returns `BuildError::InvalidAlphabet` if `text` contains the sentinel byte. No index is
    /// created in that case.
    pub fn new(text: &[u8]) -> Result<Self, BuildError> {
        let built = build_sa(text)?;
        debug!(suffixes = built.suffix_array.len(), "suffix array index built");
        Ok(Self::from(built))
    }

    /// Number of suffixes in the index, which is the text length plus the sentinel
    pub fn len(&self) -> usize {
        self.sa.len()
    }

    /// Always false, the sentinel suffix is part of every index
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The text the index was built on
    pub fn text(&self) -> &SentinelText {
        &self.text
    }

    /// The complete suffix array
    pub fn suffix_array(&self) -> &[usize] {
        &self.sa
    }

    /// The complete LCP array
    pub fn lcp_array(&self) -> &[usize] {
        &self.lcp
    }

    /// The rank range that contains every suffix
    pub fn full_range(&self) -> RankRange {
        RankRange::new(0, self.len() - 1)
    }

    /// Returns the text position of the suffix with rank `rank`
    ///
    /// # Errors
    ///
    /// Returns `QueryError::OutOfRange` if `rank` is not smaller than `self.len()`
    pub fn suffix_at(&self, rank: usize) -> Result<usize, QueryError> {
        self.sa.get(rank).copied().ok_or(QueryError::OutOfRange {
            index: rank,
            len: self.len(),
        })
    }

    /// Returns the length of the common prefix between the suffixes at rank `rank` and `rank + 1`
    ///
    /// The last rank has no successor and always returns 0.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::OutOfRange` if `rank` is not smaller than `self.len()`
    pub fn lcp_at(&self, rank: usize) -> Result<usize, QueryError> {
        self.lcp.get(rank).copied().ok_or(QueryError::OutOfRange {
            index: rank,
            len: self.len(),
        })
    }

    /// Returns the rank of the suffix starting at text position `position`
    ///
    /// # Errors
    ///
    /// Returns `QueryError::OutOfRange` if `position` lies past the sentinel
    pub fn rank_of(&self, position: usize) -> Result<usize, QueryError> {
        self.rank_of.get(position).copied().ok_or(QueryError::OutOfRange {
            index: position,
            len: self.len(),
        })
    }

    /// Returns the suffix with rank `rank` as a view into the text, without the sentinel
    ///
    /// # Errors
    ///
    /// Returns `QueryError::OutOfRange` if `rank` is not smaller than `self.len()`
    pub fn suffix(&self, rank: usize) -> Result<&[u8], QueryError> {
        let position = self.suffix_at(rank)?;
        Ok(&self.text.raw()[position..])
    }
}

impl From<BuiltSuffixArray> for SuffixArrayIndex {
    fn from(built: BuiltSuffixArray) -> Self {
        Self {
            text: built.text,
            sa: built.suffix_array,
            rank_of: built.rank_of,
            lcp: built.lcp,
        }
    }
}
