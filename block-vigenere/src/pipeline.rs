//! End-to-end cryptanalysis of a ciphertext

use tracing::{info, info_span};

use crate::alphabet;
use crate::analysis::{estimate_key_length, recover_key};
use crate::cipher::{decrypt_ciphertext, Key};
use crate::config::AnalysisConfig;
use crate::error::Result;

/// Outcome of [`break_cipher`].
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub key_length: usize,
    pub key: Key,
    pub plaintext: String,
}

/// Estimates the key length, recovers the key and decrypts `ciphertext`.
pub fn break_cipher(ciphertext: &str, config: &AnalysisConfig) -> Result<Analysis> {
    let _span = info_span!("break_cipher", len = ciphertext.len()).entered();

    config.validate()?;
    alphabet::decode_text(ciphertext)?;

    let key_length = estimate_key_length(ciphertext, config)?;
    info!(key_length, "estimated key length");

    let key = recover_key(ciphertext, key_length, config)?;
    info!(%key, strategy = ?config.strategy, "recovered key");

    let plaintext = decrypt_ciphertext(ciphertext, &key)?;

    Ok(Analysis {
        key_length,
        key,
        plaintext,
    })
}
