//! Block-indexed Vigenère primitive and whole-text transforms
//!
//! The text is cut into blocks of `key.len()` letters. Letter `k` of block `b`
//! is shifted by `key[k] + b`, so unlike textbook Vigenère every block moves
//! one further step around the alphabet.

use std::fmt;

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::{Result, VigenereError};

/// A repeating key, stored as letter ordinals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    ordinals: Vec<u8>,
}

impl Key {
    /// Builds a key from ordinals in `[0, 26)`.
    pub fn new(ordinals: Vec<u8>) -> Result<Self> {
        if ordinals.is_empty() {
            return Err(VigenereError::EmptyKey);
        }
        if let Some(&bad) = ordinals.iter().find(|&&o| o as usize >= ALPHABET_LEN) {
            return Err(VigenereError::InvalidOrdinal(bad));
        }
        Ok(Self { ordinals })
    }

    /// Parses a key such as `"CIPHER"`.
    pub fn from_letters(letters: &str) -> Result<Self> {
        Self::new(alphabet::decode_text(letters)?)
    }

    pub fn ordinals(&self) -> &[u8] {
        &self.ordinals
    }

    pub fn len(&self) -> usize {
        self.ordinals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordinals.is_empty()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = alphabet::encode_ordinals(&self.ordinals).map_err(|_| fmt::Error)?;
        f.write_str(&letters)
    }
}

/// Decrypts one ordinal: `(cipher - key - block_index) mod 26`.
///
/// Signed arguments are accepted; the result is always in `[0, 26)`.
pub fn decrypt(cipher: i64, key: i64, block_index: i64) -> u8 {
    let (cipher, key, block_index) = (reduce(cipher), reduce(key), reduce(block_index));
    reduce(cipher - key - block_index) as u8
}

/// Encrypts one ordinal: `(plain + key + block_index) mod 26`.
pub fn encrypt(plain: i64, key: i64, block_index: i64) -> u8 {
    let (plain, key, block_index) = (reduce(plain), reduce(key), reduce(block_index));
    reduce(plain + key + block_index) as u8
}

// Operands are reduced one by one so extreme inputs cannot overflow.
fn reduce(value: i64) -> i64 {
    value.rem_euclid(ALPHABET_LEN as i64)
}

/// Decrypts a whole ciphertext with `key`.
pub fn decrypt_ciphertext(ciphertext: &str, key: &Key) -> Result<String> {
    transform(ciphertext, key, decrypt)
}

/// Encrypts a whole plaintext with `key`.
pub fn encrypt_plaintext(plaintext: &str, key: &Key) -> Result<String> {
    transform(plaintext, key, encrypt)
}

fn transform(text: &str, key: &Key, shift: fn(i64, i64, i64) -> u8) -> Result<String> {
    let ordinals = alphabet::decode_text(text)?;
    let mut result = String::with_capacity(ordinals.len());

    for (block_index, block) in ordinals.chunks(key.len()).enumerate() {
        for (&letter, &key_letter) in block.iter().zip(key.ordinals()) {
            let shifted = shift(letter as i64, key_letter as i64, block_index as i64);
            result.push(alphabet::encode(shifted)?);
        }
    }

    Ok(result)
}
