//! Read-only substring search over a suffix array
//!
//! A `SuffixArrayIndex` is built once for a text and answers any number of queries afterwards.
//! Matches can be found with an incremental descent that narrows a rank range one symbol at a
//! time, or with a direct binary search for the boundaries of the matching ranks.

pub mod cursor;
pub mod error;
pub mod index;
pub mod repeats;
pub mod sa_searcher;

pub use suffixarray_builder::error::BuildError;
pub use suffixarray_builder::{ALPHABET_SIZE, SENTINEL};

pub use crate::cursor::{CursorIterator, RangeSearchResult, RankRange, SearchCursor};
pub use crate::error::QueryError;
pub use crate::index::SuffixArrayIndex;
pub use crate::repeats::RepeatedSubstring;
pub use crate::sa_searcher::{BoundSearchResult, PatternsPage, SearchAllSuffixesResult};
