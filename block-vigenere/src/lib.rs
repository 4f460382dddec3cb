//! # Block Vigenère Library
//!
//! Cryptanalysis of a Vigenère variant in which every block of the text is
//! shifted one further step than the block before it.
//!
//! ## Pipeline
//!
//! - **Key length** - split the ciphertext into streams for each candidate
//!   length and keep the length whose average Index of Coincidence is closest
//!   to English
//! - **Key** - recover each stream's key letter by frequency analysis
//!   (most frequent letter anchored on 'E', or a χ² fit)
//! - **Plaintext** - decrypt with the recovered key
//!
//! ## Usage
//!
//! ```rust
//! use block_vigenere::{break_cipher, encrypt_plaintext, AnalysisConfig, Key, KeyStrategy};
//!
//! let key = Key::from_letters("LEMON")?;
//! let plaintext = "ITWASTHEBESTOFTIMESITWASTHEWORSTOFTIMESITWASTHEAGEOFWISDOM\
//!                  ITWASTHEAGEOFFOOLISHNESSITWASTHEEPOCHOFBELIEFITWASTHEEPOCH\
//!                  OFINCREDULITYITWASTHESEASONOFLIGHTITWASTHESEASONOFDARKNESS\
//!                  ITWASTHESPRINGOFHOPEITWASTHEWINTEROFDESPAIR";
//! let ciphertext = encrypt_plaintext(plaintext, &key)?;
//!
//! let config = AnalysisConfig {
//!     strategy: KeyStrategy::ChiSquared,
//!     max_key_length: Some(12),
//!     ..Default::default()
//! };
//! let analysis = break_cipher(&ciphertext, &config)?;
//! assert_eq!(analysis.key.to_string(), "LEMON");
//! assert_eq!(analysis.plaintext, plaintext);
//! # Ok::<(), block_vigenere::VigenereError>(())
//! ```

pub mod alphabet;
pub mod analysis;
pub mod cipher;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod sample;
pub mod streams;

pub use alphabet::{decode, encode, ALPHABET_LEN};
pub use analysis::{
    calc_stream_ioc, estimate_key_length, recover_key, scan_key_lengths, FrequencyTable,
    KeyLengthCandidate,
};
pub use cipher::{decrypt, decrypt_ciphertext, encrypt, encrypt_plaintext, Key};
pub use config::{AnalysisConfig, KeyStrategy, ENGLISH_ANCHOR, ENGLISH_IOC};
pub use error::{Result, VigenereError};
pub use pipeline::{break_cipher, Analysis};
pub use streams::make_streams;
