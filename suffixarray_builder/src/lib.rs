pub mod error;
pub mod lcp;
pub mod ranking;
pub mod sentinel;

use get_size::GetSize;
use tracing::debug;

use crate::error::BuildError;
use crate::lcp::build_lcp;
use crate::ranking::rank_suffixes;
use crate::sentinel::SentinelText;

/// The byte appended to every text, it must be smaller than every other symbol
pub const SENTINEL: u8 = 0;

/// Number of different symbols a text can contain
pub const ALPHABET_SIZE: usize = 256;

/// All arrays produced during construction, owned together
#[derive(GetSize, Debug, Clone, PartialEq, Eq)]
pub struct BuiltSuffixArray {
    /// The text with sentinel
    pub text: SentinelText,
    /// Text positions in lexicographic order of their suffix
    pub suffix_array: Vec<usize>,
    /// The rank of the suffix at each text position
    pub rank_of: Vec<usize>,
    /// Longest common prefix between each rank and the next one
    pub lcp: Vec<usize>,
}

/// Builds the suffix array, its inverse and the LCP array for `data`
///
/// # Arguments
/// * `data` - The text on which we want to build the suffix array, without sentinel
///
/// # Returns
///
/// Returns the constructed suffix array together with the text it was built on
///
/// # Errors
///
/// Returns `BuildError::InvalidAlphabet` if `data` contains the sentinel byte
pub fn build_sa(data: &[u8]) -> Result<BuiltSuffixArray, BuildError> {
    let text = SentinelText::new(data)?;
    debug!(text_length = text.len(), "building suffix array");

    let ranking = rank_suffixes(&text);
    let lcp = build_lcp(text.as_bytes(), &ranking.suffix_array, &ranking.rank_of);

    Ok(BuiltSuffixArray {
        text,
        suffix_array: ranking.suffix_array,
        rank_of: ranking.rank_of,
        lcp,
    })
}
