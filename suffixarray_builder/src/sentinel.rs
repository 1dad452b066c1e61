//! The text a suffix array is built on: the raw input followed by one sentinel byte.

use get_size::GetSize;

use crate::error::BuildError;
use crate::SENTINEL;

/// Raw input text with the sentinel appended at the end
///
/// The sentinel is smaller than every other byte and occurs exactly once, so no suffix is a
/// prefix of another one and all suffixes are strictly ordered.
#[derive(GetSize, Debug, Clone, PartialEq, Eq)]
pub struct SentinelText {
    symbols: Vec<u8>,
}

impl SentinelText {
    /// Creates a new `SentinelText` by appending the sentinel to `raw`
    ///
    /// # Arguments
    /// * `raw` - The text without sentinel
    ///
    /// # Returns
    ///
    /// Returns the text with the sentinel appended
    ///
    /// # Errors
    ///
    /// Returns `BuildError::InvalidAlphabet` if `raw` already contains the sentinel byte
    pub fn new(raw: &[u8]) -> Result<Self, BuildError> {
        if let Some(position) = raw.iter().position(|&symbol| symbol == SENTINEL) {
            return Err(BuildError::InvalidAlphabet { position });
        }

        let mut symbols = Vec::with_capacity(raw.len() + 1);
        symbols.extend_from_slice(raw);
        symbols.push(SENTINEL);

        Ok(Self { symbols })
    }

    /// Length of the text, sentinel included
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false, the sentinel is part of every text
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The full text, sentinel included
    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    /// The original text, without the sentinel
    pub fn raw(&self) -> &[u8] {
        &self.symbols[..self.symbols.len() - 1]
    }

    /// Returns the symbol at `position`, or `None` if `position` lies past the sentinel
    #[inline]
    pub fn symbol_at(&self, position: usize) -> Option<u8> {
        self.symbols.get(position).copied()
    }

    /// Returns the suffix starting at `position` (sentinel included)
    ///
    /// # Panics
    ///
    /// Panics if `position` is larger than the length of the text
    pub fn suffix(&self, position: usize) -> &[u8] {
        &self.symbols[position..]
    }
}
