//! Cryptanalysis: key-length estimation and key recovery

pub mod frequency;
pub mod ioc;

pub use frequency::{
    chi_squared, chi_squared_key, most_frequent_key, recover_key, FrequencyTable,
    ENGLISH_FREQUENCIES,
};
pub use ioc::{
    average_stream_ioc, best_candidate, calc_stream_ioc, estimate_key_length, scan_key_lengths,
    KeyLengthCandidate,
};
