//! Filter sizing configuration and validation
//!
//! # Example
//!
//! ```
//! use bloom_filter::FilterConfigBuilder;
//!
//! let config = FilterConfigBuilder::new()
//!     .capacity(50_000, 0.01)
//!     .build()
//!     .expect("valid config");
//! assert_eq!(config.hash_count, 2);
//! ```

use serde::{Deserialize, Serialize};

use super::parameters::size_for_fpr;
use crate::error::FilterConfigError;

/// Upper bound on hash positions per key
pub const MAX_HASH_COUNT: usize = 16;

/// Upper bound on the bit array (128 MiB of filter)
pub const MAX_SIZE_BITS: usize = 1 << 30;

/// Bit-array size of the compact 1000-bit layout
pub const REFERENCE_SIZE_BITS: usize = 1000;

/// Names the default sizing is planned for
pub const DEFAULT_EXPECTED_ELEMENTS: usize = 10_000;

/// False positive rate the default sizing targets
pub const DEFAULT_TARGET_FPR: f64 = 0.01;

/// Hash positions per key: one per function of the hash pair
pub const DEFAULT_HASH_COUNT: usize = 2;

/// Bloom filter sizing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Size of the bit array (m)
    pub size_bits: usize,
    /// Bit positions set per key (k)
    pub hash_count: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            size_bits: size_for_fpr(DEFAULT_EXPECTED_ELEMENTS, DEFAULT_TARGET_FPR, DEFAULT_HASH_COUNT),
            hash_count: DEFAULT_HASH_COUNT,
        }
    }
}

impl FilterConfig {
    /// Create a validated configuration
    pub fn new(size_bits: usize, hash_count: usize) -> Result<Self, FilterConfigError> {
        let config = Self {
            size_bits,
            hash_count,
        };
        config.validate()?;
        Ok(config)
    }

    /// Compact 1000-bit, two-hash layout
    ///
    /// Saturates long before 10,000 names; every lookup then falls through
    /// to the linear scan.
    pub fn reference() -> Self {
        Self {
            size_bits: REFERENCE_SIZE_BITS,
            hash_count: DEFAULT_HASH_COUNT,
        }
    }

    /// Check the sizing is usable
    pub fn validate(&self) -> Result<(), FilterConfigError> {
        if self.size_bits == 0 {
            return Err(FilterConfigError::EmptyBitArray {
                size_bits: self.size_bits,
            });
        }

        if self.size_bits > MAX_SIZE_BITS {
            return Err(FilterConfigError::BitArrayTooLarge {
                size_bits: self.size_bits,
                max: MAX_SIZE_BITS,
            });
        }

        if self.hash_count == 0 || self.hash_count > MAX_HASH_COUNT {
            return Err(FilterConfigError::InvalidHashCount {
                count: self.hash_count,
                max: MAX_HASH_COUNT,
            });
        }

        Ok(())
    }
}

/// Builder for FilterConfig with validation
#[derive(Default)]
pub struct FilterConfigBuilder {
    size_bits: Option<usize>,
    hash_count: Option<usize>,
    capacity: Option<(usize, f64)>,
}

impl FilterConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bit-array size explicitly
    pub fn size_bits(mut self, bits: usize) -> Self {
        self.size_bits = Some(bits);
        self
    }

    /// Set the number of bit positions per key
    pub fn hash_count(mut self, k: usize) -> Self {
        self.hash_count = Some(k);
        self
    }

    /// Derive the bit-array size from an expected element count and target FPR
    ///
    /// Ignored when `size_bits` is also set.
    pub fn capacity(mut self, expected_elements: usize, target_fpr: f64) -> Self {
        self.capacity = Some((expected_elements, target_fpr));
        self
    }

    /// Build the FilterConfig, validating all parameters
    pub fn build(self) -> Result<FilterConfig, FilterConfigError> {
        let defaults = FilterConfig::default();
        let hash_count = self.hash_count.unwrap_or(defaults.hash_count);

        let size_bits = match (self.size_bits, self.capacity) {
            (Some(bits), _) => bits,
            (None, Some((n, fpr))) => {
                if !(fpr > 0.0 && fpr < 1.0) {
                    return Err(FilterConfigError::InvalidFpr { fpr });
                }
                size_for_fpr(n, fpr, hash_count.max(1))
            }
            (None, None) => defaults.size_bits,
        };

        FilterConfig::new(size_bits, hash_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = FilterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.hash_count, 2);
        assert!(config.size_bits > REFERENCE_SIZE_BITS);
    }

    #[test]
    fn test_reference_config() {
        let config = FilterConfig::reference();
        assert_eq!(config.size_bits, 1000);
        assert_eq!(config.hash_count, 2);
    }

    #[test]
    fn test_rejects_zero_bits() {
        let result = FilterConfig::new(0, 2);
        assert!(matches!(result, Err(FilterConfigError::EmptyBitArray { .. })));
    }

    #[test]
    fn test_rejects_oversized_bit_array() {
        assert!(FilterConfig::new(MAX_SIZE_BITS, 2).is_ok());
        assert_eq!(
            FilterConfig::new(usize::MAX, 2),
            Err(FilterConfigError::BitArrayTooLarge {
                size_bits: usize::MAX,
                max: MAX_SIZE_BITS,
            })
        );
        assert!(matches!(
            FilterConfigBuilder::new().capacity(usize::MAX / 4, 1e-12).build(),
            Err(FilterConfigError::BitArrayTooLarge { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_hash_count() {
        assert!(matches!(
            FilterConfig::new(1000, 0),
            Err(FilterConfigError::InvalidHashCount { .. })
        ));
        assert!(matches!(
            FilterConfig::new(1000, MAX_HASH_COUNT + 1),
            Err(FilterConfigError::InvalidHashCount { .. })
        ));
    }

    #[test]
    fn test_builder_uses_defaults() {
        let config = FilterConfigBuilder::new().build().unwrap();
        assert_eq!(config, FilterConfig::default());
    }

    #[test]
    fn test_builder_explicit_size_wins_over_capacity() {
        let config = FilterConfigBuilder::new()
            .capacity(1_000_000, 0.001)
            .size_bits(4096)
            .build()
            .unwrap();
        assert_eq!(config.size_bits, 4096);
    }

    #[test]
    fn test_builder_capacity_grows_with_elements() {
        let small = FilterConfigBuilder::new().capacity(1_000, 0.01).build().unwrap();
        let large = FilterConfigBuilder::new().capacity(100_000, 0.01).build().unwrap();
        assert!(large.size_bits > small.size_bits);
    }

    #[test]
    fn test_builder_rejects_invalid_fpr() {
        let result = FilterConfigBuilder::new().capacity(1_000, 1.5).build();
        assert!(matches!(result, Err(FilterConfigError::InvalidFpr { .. })));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: FilterConfig = serde_json::from_str(r#"{"size_bits": 2048}"#).unwrap();
        assert_eq!(config.size_bits, 2048);
        assert_eq!(config.hash_count, DEFAULT_HASH_COUNT);
    }
}
