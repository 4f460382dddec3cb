//! Error types for cipher and analysis operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VigenereError {
    #[error("Invalid letter {0:?} (expected 'A'..='Z')")]
    InvalidLetter(char),

    #[error("Invalid ordinal {0} (must be < 26)")]
    InvalidOrdinal(u8),

    #[error("Invalid block size (must be > 0)")]
    InvalidBlockSize,

    #[error("Key cannot be empty")]
    EmptyKey,

    #[error("Text too short for key length analysis: {len} letters (need at least 3)")]
    TextTooShort { len: usize },

    #[error("Invalid analysis configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, VigenereError>;
