use thiserror::Error;

/// Errors that can occur while building the suffix array
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// The input text contains the byte reserved as sentinel (`0x00`)
    #[error("Input text contains the reserved sentinel byte 0x00 at position {position}")]
    InvalidAlphabet { position: usize },
}
