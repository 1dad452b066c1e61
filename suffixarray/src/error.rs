use thiserror::Error;

/// Errors returned by queries on a `SuffixArrayIndex`
///
/// Finding no occurrences is never an error, only asking for something outside the index is.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// A rank or text position outside `0..len`
    #[error("Index {index} is out of range for an index over {len} suffixes")]
    OutOfRange { index: usize, len: usize },
}
