//! Index of Coincidence and the key-length scan

use tracing::debug;

use crate::alphabet::{self, ALPHABET_LEN};
use crate::cipher;
use crate::config::AnalysisConfig;
use crate::error::{Result, VigenereError};
use crate::streams;

/// Average stream IoC for one candidate key length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyLengthCandidate {
    pub key_length: usize,
    pub average_ioc: f64,
    /// `|average_ioc - expected_ioc|`
    pub deviation: f64,
}

/// Calculates the Index of Coincidence of a stream after decrypting it with
/// `trial_key`.
///
/// Each letter is decrypted at its position within the stream (its block
/// index). Streams of fewer than two letters carry no information and
/// return 0.0.
///
/// IC = Σ fᵢ·(fᵢ−1) / (N·(N−1))
pub fn calc_stream_ioc(stream: &str, trial_key: u8) -> Result<f64> {
    let ordinals = alphabet::decode_text(stream)?;
    let total = ordinals.len();
    if total < 2 {
        return Ok(0.0);
    }

    let mut frequencies = [0u64; ALPHABET_LEN];
    for (block, &ordinal) in ordinals.iter().enumerate() {
        let plain = cipher::decrypt(ordinal as i64, trial_key as i64, block as i64);
        frequencies[plain as usize] += 1;
    }

    let numerator: u64 = frequencies.iter().map(|&f| f * f.saturating_sub(1)).sum();
    let denominator = (total * (total - 1)) as f64;
    Ok(numerator as f64 / denominator)
}

/// Average IoC over all `key_length` streams of `text`, with trial key 0.
pub fn average_stream_ioc(text: &str, key_length: usize) -> Result<f64> {
    let streams = streams::make_streams(text, key_length)?;

    let mut ioc_sum = 0.0;
    for stream in &streams {
        ioc_sum += calc_stream_ioc(stream, 0)?;
    }

    Ok(ioc_sum / key_length as f64)
}

/// Scores every candidate key length against the expected IoC.
///
/// Candidates run from `config.min_key_length` up to `len(text) - 1`
/// (inclusive), optionally capped by `config.max_key_length`. A key as long
/// as the text would leave only singleton streams and is never scanned.
pub fn scan_key_lengths(text: &str, config: &AnalysisConfig) -> Result<Vec<KeyLengthCandidate>> {
    config.validate()?;

    let len = text.chars().count();
    if len < config.min_key_length + 1 {
        return Err(VigenereError::TextTooShort { len });
    }

    let upper = match config.max_key_length {
        Some(max) => max.saturating_add(1).min(len),
        None => len,
    };

    let mut candidates = Vec::with_capacity(upper.saturating_sub(config.min_key_length));
    for key_length in config.min_key_length..upper {
        let average_ioc = average_stream_ioc(text, key_length)?;
        let deviation = (average_ioc - config.expected_ioc).abs();
        debug!(key_length, average_ioc, deviation, "scanned key length");

        candidates.push(KeyLengthCandidate {
            key_length,
            average_ioc,
            deviation,
        });
    }

    Ok(candidates)
}

/// Picks the candidate whose average IoC is closest to the expected value.
///
/// Ties keep the shortest key length.
pub fn best_candidate(candidates: &[KeyLengthCandidate]) -> Option<KeyLengthCandidate> {
    let mut best: Option<KeyLengthCandidate> = None;
    for candidate in candidates {
        match best {
            Some(current) if candidate.deviation >= current.deviation => {}
            _ => best = Some(*candidate),
        }
    }
    best
}

/// Estimates the key length of `text`.
pub fn estimate_key_length(text: &str, config: &AnalysisConfig) -> Result<usize> {
    let candidates = scan_key_lengths(text, config)?;
    let len = text.chars().count();
    best_candidate(&candidates)
        .map(|c| c.key_length)
        .ok_or(VigenereError::TextTooShort { len })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::{encrypt_plaintext, Key};

    #[test]
    fn test_singleton_and_empty_streams() {
        assert_eq!(calc_stream_ioc("Q", 0).unwrap(), 0.0);
        assert_eq!(calc_stream_ioc("", 0).unwrap(), 0.0);
    }

    #[test]
    fn test_constant_plaintext_stream() {
        // Every letter decrypts to 'A' once the block shift is removed.
        let stream = "ABCDEFGHIJKLMNOPQRSTUVWXYZ".repeat(4);
        assert_eq!(calc_stream_ioc(&stream, 0).unwrap(), 1.0);
    }

    #[test]
    fn test_uniform_plaintext_stream() {
        // A constant ciphertext letter spreads evenly over the alphabet.
        let stream = "A".repeat(2600);
        let ioc = calc_stream_ioc(&stream, 0).unwrap();
        assert!((ioc - 1.0 / 26.0).abs() < 0.001, "ioc = {}", ioc);
    }

    #[test]
    fn test_trial_key_permutes_histogram() {
        let stream = "HELLOWORLDTHISISASTREAM";
        let base = calc_stream_ioc(stream, 0).unwrap();
        for key in 1..26 {
            assert!((calc_stream_ioc(stream, key).unwrap() - base).abs() < 1e-12);
        }
    }

    #[test]
    fn test_invalid_letters() {
        assert_eq!(
            calc_stream_ioc("AB1", 0),
            Err(VigenereError::InvalidLetter('1'))
        );
    }

    #[test]
    fn test_scan_range() {
        let text = "ABCDEFGHIJ";
        let candidates = scan_key_lengths(text, &AnalysisConfig::default()).unwrap();
        let lengths: Vec<usize> = candidates.iter().map(|c| c.key_length).collect();
        assert_eq!(lengths, (2..10).collect::<Vec<_>>());

        let config = AnalysisConfig {
            max_key_length: Some(4),
            ..Default::default()
        };
        let candidates = scan_key_lengths(text, &config).unwrap();
        assert_eq!(candidates.len(), 3);
    }

    #[test]
    fn test_scan_unbounded_max_clamps_to_text() {
        let config = AnalysisConfig {
            max_key_length: Some(usize::MAX),
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let candidates = scan_key_lengths("ABCDEFGHIJ", &config).unwrap();
        assert_eq!(candidates.first().unwrap().key_length, 2);
        assert_eq!(candidates.last().unwrap().key_length, 9);
    }

    #[test]
    fn test_text_too_short() {
        assert_eq!(
            estimate_key_length("AB", &AnalysisConfig::default()),
            Err(VigenereError::TextTooShort { len: 2 })
        );
    }

    #[test]
    fn test_best_candidate_prefers_first_minimum() {
        let candidates = [
            KeyLengthCandidate { key_length: 2, average_ioc: 0.04, deviation: 0.027 },
            KeyLengthCandidate { key_length: 3, average_ioc: 0.06, deviation: 0.007 },
            KeyLengthCandidate { key_length: 4, average_ioc: 0.06, deviation: 0.007 },
        ];
        assert_eq!(best_candidate(&candidates).unwrap().key_length, 3);
        assert_eq!(best_candidate(&[]), None);
    }

    #[test]
    fn test_recovers_key_length_of_english_text() {
        let plaintext = "ITWASTHEBESTOFTIMESITWASTHEWORSTOFTIMESITWASTHEAGEOFWISDOM\
                         ITWASTHEAGEOFFOOLISHNESSITWASTHEEPOCHOFBELIEFITWASTHEEPOCH\
                         OFINCREDULITYITWASTHESEASONOFLIGHTITWASTHESEASONOFDARKNESS\
                         ITWASTHESPRINGOFHOPEITWASTHEWINTEROFDESPAIR";
        let key = Key::from_letters("LEMON").unwrap();
        let ciphertext = encrypt_plaintext(plaintext, &key).unwrap();

        let config = AnalysisConfig {
            max_key_length: Some(12),
            ..Default::default()
        };
        assert_eq!(estimate_key_length(&ciphertext, &config).unwrap(), 5);
    }
}
