//! # Bloom Filter
//!
//! Fixed-size probabilistic set over text keys, used as a pre-filter in front
//! of an authoritative membership check.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `BloomFilter`: Bit array plus a pluggable hash pair
//!   - `Djb2Sdbm`: Default DJB2 / SDBM hash pair
//!   - `FilterConfig`: Bit-array size and hash count, validated
//!   - `FilterConfigBuilder`: Fluent builder, can size from a target FPR
//!
//! ## Invariants
//!
//! - **No false negatives**: if added, `contains()` MUST return true
//! - **Monotonic**: bits are never cleared; there is no removal
//!
//! ## Usage Example
//!
//! ```
//! use bloom_filter::{BloomFilter, FilterConfig};
//!
//! let mut filter = BloomFilter::from_config(&FilterConfig::default());
//! filter.add("alice");
//!
//! assert!(filter.contains("alice"));
//! ```

pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::{
    calculate_fpr, size_for_fpr, BloomFilter, Djb2Sdbm, FilterConfig, FilterConfigBuilder,
    HashPair,
};
pub use error::FilterConfigError;
