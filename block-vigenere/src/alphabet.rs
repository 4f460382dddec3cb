//! Letter <-> ordinal codec for the 26-letter uppercase alphabet

use crate::error::{Result, VigenereError};

/// Number of letters in the alphabet (A-Z).
pub const ALPHABET_LEN: usize = 26;

/// Maps 'A'..='Z' to 0..=25.
pub fn decode(letter: char) -> Result<u8> {
    if letter.is_ascii_uppercase() {
        Ok(letter as u8 - b'A')
    } else {
        Err(VigenereError::InvalidLetter(letter))
    }
}

/// Maps 0..=25 back to 'A'..='Z'.
///
/// Callers holding an unreduced value must take it modulo [`ALPHABET_LEN`]
/// first; anything out of range is rejected.
pub fn encode(ordinal: u8) -> Result<char> {
    if (ordinal as usize) < ALPHABET_LEN {
        Ok((b'A' + ordinal) as char)
    } else {
        Err(VigenereError::InvalidOrdinal(ordinal))
    }
}

/// Decodes a whole text, failing on the first character outside the alphabet.
pub fn decode_text(text: &str) -> Result<Vec<u8>> {
    text.chars().map(decode).collect()
}

/// Encodes a sequence of ordinals into a `String`.
pub fn encode_ordinals(ordinals: &[u8]) -> Result<String> {
    ordinals.iter().map(|&ordinal| encode(ordinal)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_bounds() {
        assert_eq!(decode('A'), Ok(0));
        assert_eq!(decode('E'), Ok(4));
        assert_eq!(decode('Z'), Ok(25));
    }

    #[test]
    fn test_decode_rejects_non_letters() {
        assert_eq!(decode('a'), Err(VigenereError::InvalidLetter('a')));
        assert_eq!(decode(' '), Err(VigenereError::InvalidLetter(' ')));
        assert_eq!(decode('Ä'), Err(VigenereError::InvalidLetter('Ä')));
    }

    #[test]
    fn test_encode_inverts_decode() {
        for ordinal in 0..ALPHABET_LEN as u8 {
            let letter = encode(ordinal).unwrap();
            assert_eq!(decode(letter).unwrap(), ordinal);
        }
    }

    #[test]
    fn test_encode_out_of_range() {
        assert_eq!(encode(26), Err(VigenereError::InvalidOrdinal(26)));
    }

    #[test]
    fn test_decode_text() {
        assert_eq!(decode_text("CIPHER").unwrap(), vec![2, 8, 15, 7, 4, 17]);
        assert_eq!(
            decode_text("CIPHER TEXT"),
            Err(VigenereError::InvalidLetter(' '))
        );
        assert_eq!(encode_ordinals(&[10, 4, 24]).unwrap(), "KEY");
    }
}
