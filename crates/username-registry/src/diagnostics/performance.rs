//! Filter-backed checks versus a plain linear scan
//!
//! Diagnostic instrumentation only. Timings are wall-clock and vary run to
//! run; nothing here feeds back into check or registration results.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::ports::UsernameApi;

/// Prefix for lookups constructed to miss the registry
pub const NOVEL_PREFIX: &str = "testuser";

/// Timing comparison of the two lookup strategies
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PerformanceReport {
    /// Lookups drawn from the registered set
    pub existing_lookups: usize,
    /// Lookups guaranteed not to be registered
    pub novel_lookups: usize,
    /// Total time for two-level `check_username` over all lookups
    pub filter_ms: f64,
    /// Total time for a linear scan over all lookups
    pub linear_ms: f64,
    /// `linear_ms / filter_ms`; 0 when nothing was timed
    pub speedup: f64,
}

impl PerformanceReport {
    pub fn searches(&self) -> usize {
        self.existing_lookups + self.novel_lookups
    }

    fn from_timings(existing: usize, novel: usize, filter: Duration, linear: Duration) -> Self {
        let filter_ms = filter.as_secs_f64() * 1000.0;
        let linear_ms = linear.as_secs_f64() * 1000.0;
        let speedup = if filter_ms > 0.0 {
            linear_ms / filter_ms
        } else {
            0.0
        };

        Self {
            existing_lookups: existing,
            novel_lookups: novel,
            filter_ms,
            linear_ms,
            speedup,
        }
    }
}

impl fmt::Display for PerformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Performance Comparison ({} searches):", self.searches())?;
        writeln!(f, "Bloom Filter: {:.3} ms", self.filter_ms)?;
        writeln!(f, "Linear Search: {:.3} ms", self.linear_ms)?;
        writeln!(f, "Speedup: {:.1}x faster", self.speedup)
    }
}

/// Build the lookup set: `sample_size` registered names, then `sample_size`
/// unregistered `testuser<n>` names
pub fn sample_lookups<A, R>(api: &A, sample_size: usize, rng: &mut R) -> (Vec<String>, usize)
where
    A: UsernameApi + ?Sized,
    R: Rng,
{
    let registered = api.usernames();
    let mut lookups = Vec::with_capacity(sample_size * 2);

    if !registered.is_empty() {
        for _ in 0..sample_size {
            if let Some(name) = registered.choose(rng) {
                lookups.push(name.clone());
            }
        }
    }
    let existing = lookups.len();

    for _ in 0..sample_size {
        let candidate = loop {
            let candidate = format!("{}{}", NOVEL_PREFIX, rng.gen::<u32>());
            if !api.contains_exact(&candidate) {
                break candidate;
            }
        };
        lookups.push(candidate);
    }

    (lookups, existing)
}

/// Time `check_username` against a linear scan over the same lookups
pub fn compare_performance<A, R>(api: &A, sample_size: usize, rng: &mut R) -> PerformanceReport
where
    A: UsernameApi + ?Sized,
    R: Rng,
{
    let (lookups, existing) = sample_lookups(api, sample_size, rng);
    let registered = api.usernames();

    let start = Instant::now();
    for name in &lookups {
        black_box(api.check_username(black_box(name)));
    }
    let filter_elapsed = start.elapsed();

    let start = Instant::now();
    for name in &lookups {
        black_box(registered.iter().any(|n| n == black_box(name)));
    }
    let linear_elapsed = start.elapsed();

    PerformanceReport::from_timings(
        existing,
        lookups.len() - existing,
        filter_elapsed,
        linear_elapsed,
    )
}
