//! Splitting a text into key-aligned streams

use crate::error::{Result, VigenereError};

/// Splits `text` into `block_size` interleaved streams.
///
/// Character `i` lands in stream `i % block_size`. Every stream keeps the
/// relative order of its characters, so each one holds exactly the letters
/// enciphered under the same key position.
pub fn make_streams(text: &str, block_size: usize) -> Result<Vec<String>> {
    if block_size == 0 {
        return Err(VigenereError::InvalidBlockSize);
    }

    let mut streams = vec![String::new(); block_size];
    for (i, c) in text.chars().enumerate() {
        streams[i % block_size].push(c);
    }

    Ok(streams)
}
