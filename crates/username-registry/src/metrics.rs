//! Metrics hooks for registry operations
//!
//! Counts how checks were resolved, which is the evidence for whether the
//! filter is pulling its weight: every `FilterMiss` is a linear scan avoided,
//! every `FalsePositive` is a scan the filter failed to avoid.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use username_registry::metrics::RegistryMetrics;
//!
//! let metrics = Arc::new(RegistryMetrics::new());
//! // pass `metrics.clone()` to `UsernameRegistry::open_with_metrics`
//! let snapshot = metrics.snapshot();
//! assert_eq!(snapshot.checks_performed, 0);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;

use crate::domain::Lookup;

/// Thread-safe counters for registry activity
#[derive(Default)]
pub struct RegistryMetrics {
    /// Total availability checks (including those made by registrations)
    pub checks_performed: AtomicU64,
    /// Checks rejected by validation before any lookup
    pub invalid_rejections: AtomicU64,
    /// Lookups the filter answered "definitely not"
    pub filter_misses: AtomicU64,
    /// Filter hits that the linear scan disproved
    pub false_positives: AtomicU64,
    /// Filter hits confirmed by the linear scan
    pub confirmed_taken: AtomicU64,
    /// Successful registrations
    pub registrations: AtomicU64,
    /// Registrations aborted by a failed store append
    pub persist_failures: AtomicU64,
    /// Cumulative check time in nanoseconds
    pub check_time_ns: AtomicU64,
}

impl RegistryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        let checks = self.checks_performed.load(Ordering::Relaxed);
        let total_ns = self.check_time_ns.load(Ordering::Relaxed);
        MetricsSnapshot {
            checks_performed: checks,
            invalid_rejections: self.invalid_rejections.load(Ordering::Relaxed),
            filter_misses: self.filter_misses.load(Ordering::Relaxed),
            false_positives: self.false_positives.load(Ordering::Relaxed),
            confirmed_taken: self.confirmed_taken.load(Ordering::Relaxed),
            registrations: self.registrations.load(Ordering::Relaxed),
            persist_failures: self.persist_failures.load(Ordering::Relaxed),
            avg_check_ns: if checks > 0 { total_ns / checks } else { 0 },
        }
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub checks_performed: u64,
    pub invalid_rejections: u64,
    pub filter_misses: u64,
    pub false_positives: u64,
    pub confirmed_taken: u64,
    pub registrations: u64,
    pub persist_failures: u64,
    pub avg_check_ns: u64,
}

impl MetricsSnapshot {
    /// Share of valid lookups that needed a linear scan
    pub fn scan_rate(&self) -> f64 {
        let scans = self.false_positives + self.confirmed_taken;
        let lookups = scans + self.filter_misses;
        if lookups > 0 {
            scans as f64 / lookups as f64
        } else {
            0.0
        }
    }
}

/// Trait for custom metrics recording implementations
pub trait MetricsRecorder: Send + Sync {
    /// Record a completed check; `lookup` is `None` when validation failed
    fn record_check(&self, duration: Duration, lookup: Option<Lookup>);

    fn record_registration(&self);

    fn record_persist_failure(&self);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_check(&self, _: Duration, _: Option<Lookup>) {}
    fn record_registration(&self) {}
    fn record_persist_failure(&self) {}
}

impl MetricsRecorder for RegistryMetrics {
    fn record_check(&self, duration: Duration, lookup: Option<Lookup>) {
        self.checks_performed.fetch_add(1, Ordering::Relaxed);
        self.check_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);

        let counter = match lookup {
            None => &self.invalid_rejections,
            Some(Lookup::FilterMiss) => &self.filter_misses,
            Some(Lookup::FalsePositive) => &self.false_positives,
            Some(Lookup::Found) => &self.confirmed_taken,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn record_registration(&self) {
        self.registrations.fetch_add(1, Ordering::Relaxed);
    }

    fn record_persist_failure(&self) {
        self.persist_failures.fetch_add(1, Ordering::Relaxed);
    }
}
