//! Hash functions for the Bloom filter
//!
//! Two classic rolling string hashes, both accumulating one `char` at a time:
//! - DJB2: `h = h * 33 + c`, seeded with 5381
//! - SDBM: `h = c + (h << 6) + (h << 16) - h`, seeded with 0
//!
//! Characters are mapped by Unicode scalar value. Arithmetic wraps on `u64`,
//! so results are identical on every platform and every run.

/// A pair of independent, deterministic string hashes.
///
/// Implementations must be pure functions of the key: no seeds drawn at
/// runtime, no time dependency. Otherwise a rebuilt filter would disagree
/// with itself between `add` and `contains`.
pub trait HashPair: Send + Sync {
    /// First hash of the key (unreduced).
    fn primary(&self, key: &str) -> u64;

    /// Second, independent hash of the key (unreduced).
    fn secondary(&self, key: &str) -> u64;
}

/// DJB2 / SDBM hash pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Djb2Sdbm;

impl HashPair for Djb2Sdbm {
    fn primary(&self, key: &str) -> u64 {
        djb2(key)
    }

    fn secondary(&self, key: &str) -> u64 {
        sdbm(key)
    }
}

/// DJB2 rolling hash.
pub fn djb2(key: &str) -> u64 {
    key.chars().fold(5381u64, |hash, c| {
        (hash << 5).wrapping_add(hash).wrapping_add(c as u64)
    })
}

/// SDBM rolling hash.
pub fn sdbm(key: &str) -> u64 {
    key.chars().fold(0u64, |hash, c| {
        (c as u64)
            .wrapping_add(hash << 6)
            .wrapping_add(hash << 16)
            .wrapping_sub(hash)
    })
}

/// Compute `k` bit positions for a key in an `m`-bit array.
///
/// Position 0 is the primary hash and position 1 the secondary hash, each
/// reduced modulo `m`. Further positions use enhanced double hashing:
/// `g(i) = h1 + i * h2`. With `k = 2` this is exactly one bit per hash.
pub fn compute_hash_positions<H: HashPair + ?Sized>(
    hasher: &H,
    key: &str,
    k: usize,
    m: usize,
) -> Vec<usize> {
    let m64 = m as u64;
    let h1 = hasher.primary(key);
    let h2 = hasher.secondary(key);

    (0..k)
        .map(|i| {
            let hash = match i {
                0 => h1,
                1 => h2,
                _ => h1.wrapping_add((i as u64).wrapping_mul(h2)),
            };
            (hash % m64) as usize
        })
        .collect()
}
