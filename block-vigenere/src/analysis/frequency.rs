//! Frequency analysis and per-stream key recovery

use tracing::debug;

use crate::alphabet::{self, ALPHABET_LEN};
use crate::cipher::{self, Key};
use crate::config::{AnalysisConfig, KeyStrategy};
use crate::error::Result;
use crate::streams;

/// English letter frequencies (A-Z) for χ² scoring
pub const ENGLISH_FREQUENCIES: [f64; ALPHABET_LEN] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094,
    0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929,
    0.00095, 0.05987, 0.06327, 0.09056, 0.02758, 0.00978, 0.02360, 0.00150,
    0.01974, 0.00074,
];

/// Letter counts of a decrypted stream, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(u8, usize)>,
}

impl FrequencyTable {
    /// Decrypts `stream` with `trial_key` (block index = position in the
    /// stream) and counts the resulting letters.
    pub fn from_stream(stream: &str, trial_key: u8) -> Result<Self> {
        let mut table = Self::default();
        for (block, letter) in stream.chars().enumerate() {
            let ordinal = alphabet::decode(letter)?;
            table.record(cipher::decrypt(ordinal as i64, trial_key as i64, block as i64));
        }
        Ok(table)
    }

    fn record(&mut self, ordinal: u8) {
        match self.entries.iter_mut().find(|(o, _)| *o == ordinal) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((ordinal, 1)),
        }
    }

    pub fn count(&self, ordinal: u8) -> usize {
        self.entries
            .iter()
            .find(|(o, _)| *o == ordinal)
            .map_or(0, |&(_, count)| count)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// The most frequent letter and its count.
    ///
    /// On a tie the letter seen first in the stream wins.
    pub fn most_frequent(&self) -> Option<(u8, usize)> {
        let mut best: Option<(u8, usize)> = None;
        for &(ordinal, count) in &self.entries {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((ordinal, count));
            }
        }
        best
    }
}

/// Key letter that maps the stream's most frequent letter onto `anchor`.
///
/// An empty stream gives key 0.
pub fn most_frequent_key(stream: &str, anchor: char) -> Result<u8> {
    let anchor = alphabet::decode(anchor)?;
    let table = FrequencyTable::from_stream(stream, 0)?;

    Ok(match table.most_frequent() {
        Some((letter, _)) => cipher::decrypt(letter as i64, anchor as i64, 0),
        None => 0,
    })
}

/// χ² distance between a frequency table and English letter frequencies.
pub fn chi_squared(table: &FrequencyTable) -> f64 {
    let text_length = table.total() as f64;

    ENGLISH_FREQUENCIES
        .iter()
        .zip(0u8..)
        .map(|(&frequency, ordinal)| {
            let expected = frequency * text_length;
            if expected > 0.0 {
                (table.count(ordinal) as f64 - expected).powi(2) / expected
            } else {
                0.0
            }
        })
        .sum()
}

/// Key letter whose decryption of the stream scores closest to English.
///
/// Ties keep the smaller key letter.
pub fn chi_squared_key(stream: &str) -> Result<u8> {
    let mut best_key = 0;
    let mut best_score = f64::INFINITY;

    for trial_key in 0..ALPHABET_LEN as u8 {
        let table = FrequencyTable::from_stream(stream, trial_key)?;
        let score = chi_squared(&table);
        if score < best_score {
            best_score = score;
            best_key = trial_key;
        }
    }

    Ok(best_key)
}

/// Recovers a key of `key_length` letters from `text`.
pub fn recover_key(text: &str, key_length: usize, config: &AnalysisConfig) -> Result<Key> {
    let streams = streams::make_streams(text, key_length)?;
    let mut ordinals = Vec::with_capacity(key_length);

    for (position, stream) in streams.iter().enumerate() {
        let key_letter = match config.strategy {
            KeyStrategy::MostFrequent => most_frequent_key(stream, config.anchor)?,
            KeyStrategy::ChiSquared => chi_squared_key(stream)?,
        };
        debug!(position, key_letter, "recovered stream key");
        ordinals.push(key_letter);
    }

    Key::new(ordinals)
}
