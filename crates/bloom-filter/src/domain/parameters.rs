//! Bloom filter sizing math
//!
//! Formulas:
//! - FPR = (1 - e^(-kn/m))^k
//! - m = -k*n / ln(1 - fpr^(1/k))  -- bits needed for a fixed k

/// Estimate the false positive rate for given parameters
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}

/// Bits needed to hold `n` elements at `target_fpr` with a fixed hash count `k`
///
/// The hash count is fixed by the hash pair in use, so this solves the FPR
/// formula for `m` instead of picking the optimal `k`.
pub fn size_for_fpr(n: usize, target_fpr: f64, k: usize) -> usize {
    if n == 0 || k == 0 {
        return 1;
    }
    let per_hash = target_fpr.powf(1.0 / k as f64);
    let m = -(k as f64) * (n as f64) / (1.0 - per_hash).ln();
    (m.ceil() as usize).max(1)
}
