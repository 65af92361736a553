//! Error types for filter configuration

use thiserror::Error;

/// Errors raised while validating filter sizing.
///
/// `add` and `contains` never fail; only configuration does.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FilterConfigError {
    #[error("Filter size must be at least 1 bit, got {size_bits}")]
    EmptyBitArray { size_bits: usize },

    #[error("Filter size must be at most {max} bits, got {size_bits}")]
    BitArrayTooLarge { size_bits: usize, max: usize },

    #[error("Hash count must be between 1 and {max}, got {count}")]
    InvalidHashCount { count: usize, max: usize },

    #[error("Invalid false positive rate: {fpr} (must be between 0 and 1, exclusive)")]
    InvalidFpr { fpr: f64 },
}
