//! Core Bloom Filter implementation
//!
//! INVARIANTS:
//! - No false negatives: once `add(key)` returns, `contains(key)` is true
//! - Bits are only ever set, never cleared

use bitvec::prelude::*;

use super::config::FilterConfig;
use super::hash_functions::{compute_hash_positions, Djb2Sdbm, HashPair};
use super::parameters::calculate_fpr;

/// Fixed-size Bloom filter over text keys
///
/// A `true` from [`contains`](Self::contains) is only a candidate match and
/// must be confirmed against an authoritative source. A `false` is final.
#[derive(Clone, Debug)]
pub struct BloomFilter<H = Djb2Sdbm> {
    /// Bit array storing the filter state
    bits: BitVec<u8, Lsb0>,
    /// Number of bit positions per key (k)
    k: usize,
    /// Size in bits (m)
    m: usize,
    /// Number of `add` calls (n), diagnostics only
    n: usize,
    hasher: H,
}

impl BloomFilter<Djb2Sdbm> {
    /// Create an empty filter with the DJB2/SDBM hash pair
    ///
    /// # Arguments
    /// * `m` - Size in bits, at least 1
    /// * `k` - Bit positions per key, at least 1
    pub fn new(m: usize, k: usize) -> Self {
        Self::with_hasher(m, k, Djb2Sdbm)
    }

    /// Create an empty filter from a validated configuration
    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(config.size_bits, config.hash_count)
    }
}

impl<H: HashPair> BloomFilter<H> {
    /// Create an empty filter with a custom hash pair
    pub fn with_hasher(m: usize, k: usize, hasher: H) -> Self {
        let m = m.max(1);
        let k = k.max(1);
        Self {
            bits: bitvec![u8, Lsb0; 0; m],
            k,
            m,
            n: 0,
            hasher,
        }
    }

    /// Insert a key
    ///
    /// Idempotent with respect to the bit array: re-adding a key sets bits
    /// that are already set.
    pub fn add(&mut self, key: &str) {
        for pos in compute_hash_positions(&self.hasher, key, self.k, self.m) {
            self.bits.set(pos, true);
        }
        self.n += 1;
    }

    /// Test if a key might have been added
    ///
    /// Returns:
    /// - `true` if the key might be in the set (could be false positive)
    /// - `false` if the key was definitely never added
    pub fn contains(&self, key: &str) -> bool {
        compute_hash_positions(&self.hasher, key, self.k, self.m)
            .into_iter()
            .all(|pos| self.bits[pos])
    }

    /// Estimated false positive rate at the current load
    ///
    /// Formula: FPR = (1 - e^(-kn/m))^k
    pub fn false_positive_rate(&self) -> f64 {
        calculate_fpr(self.m, self.n, self.k)
    }

    /// Fraction of bits currently set
    pub fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.m as f64
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Get the filter size in bits
    pub fn size_bits(&self) -> usize {
        self.m
    }

    /// Get the number of bit positions per key
    pub fn hash_count(&self) -> usize {
        self.k
    }

    /// Get the number of `add` calls so far (duplicates included)
    pub fn elements_inserted(&self) -> usize {
        self.n
    }
}
