//! Analysis parameters passed into the pipeline

use crate::alphabet;
use crate::error::{Result, VigenereError};

/// Expected Index of Coincidence of English plaintext.
pub const ENGLISH_IOC: f64 = 0.067;

/// Most frequent letter in English plaintext.
pub const ENGLISH_ANCHOR: char = 'E';

/// Smallest key length the scanner considers.
pub const MIN_KEY_LENGTH: usize = 2;

/// How each stream's key letter is recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyStrategy {
    /// Shift the stream's most frequent letter onto the anchor letter.
    #[default]
    MostFrequent,
    /// Try all 26 key letters and keep the one closest to English (χ²).
    ChiSquared,
}

/// Immutable configuration for one cryptanalysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Target average stream IoC for the key-length scan.
    pub expected_ioc: f64,
    /// Letter assumed to dominate each decrypted stream.
    ///
    /// Must be 'E' for English. An 'A' anchor was used by an early version of
    /// this analysis and recovers wrong keys; it is kept selectable only so
    /// the two can be compared.
    pub anchor: char,
    pub min_key_length: usize,
    /// Upper bound on scanned key lengths. `None` scans up to `len - 1`.
    pub max_key_length: Option<usize>,
    pub strategy: KeyStrategy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            expected_ioc: ENGLISH_IOC,
            anchor: ENGLISH_ANCHOR,
            min_key_length: MIN_KEY_LENGTH,
            max_key_length: None,
            strategy: KeyStrategy::MostFrequent,
        }
    }
}

impl AnalysisConfig {
    /// Checks the configuration before any analysis runs.
    pub fn validate(&self) -> Result<()> {
        if !self.expected_ioc.is_finite() || !(0.0..=1.0).contains(&self.expected_ioc) {
            return Err(VigenereError::InvalidConfig(format!(
                "expected IoC {} must lie in [0, 1]",
                self.expected_ioc
            )));
        }

        alphabet::decode(self.anchor)?;

        if self.min_key_length < MIN_KEY_LENGTH {
            return Err(VigenereError::InvalidConfig(format!(
                "minimum key length {} is below {}",
                self.min_key_length, MIN_KEY_LENGTH
            )));
        }

        if let Some(max) = self.max_key_length {
            if max < self.min_key_length {
                return Err(VigenereError::InvalidConfig(format!(
                    "maximum key length {} is below minimum {}",
                    max, self.min_key_length
                )));
            }
        }

        Ok(())
    }
}
