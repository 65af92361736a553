//! Username Registry Service
//!
//! Owns the authoritative name list and its Bloom filter behind one
//! read-write lock:
//! - `check_username` takes the read lock, so checks run in parallel
//! - `add_user` takes the write lock for check + persist + commit, so no
//!   reader ever sees the list updated without the filter (or vice versa)
//!   and two registrations of one name cannot both succeed

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::config::RegistryConfig;
use crate::domain::{
    seed_names, shortfall, Lookup, Registration, RegistryState, ValidationRules, Verdict,
};
use crate::error::{ConfigError, StoreError};
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::{NameStore, UsernameApi};

/// Read-only view of the filter's load
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FilterStats {
    pub registered: usize,
    pub size_bits: usize,
    pub hash_count: usize,
    pub bits_set: usize,
    pub fill_ratio: f64,
    pub estimated_fpr: f64,
}

/// Username registry implementation
///
/// Implements the `UsernameApi` port over an injected `NameStore`.
pub struct UsernameRegistry<S: NameStore> {
    state: RwLock<RegistryState>,
    store: Arc<S>,
    rules: ValidationRules,
    metrics: Arc<dyn MetricsRecorder>,
}

impl<S: NameStore> UsernameRegistry<S> {
    /// Load persisted names (seeding any shortfall) and build the filter
    ///
    /// Persistence problems are recovered locally; only an invalid
    /// configuration is an error.
    pub fn open(config: &RegistryConfig, store: Arc<S>) -> Result<Self, ConfigError> {
        Self::open_with_metrics(config, store, Arc::new(NoOpMetrics))
    }

    /// Like [`open`](Self::open), recording activity into `metrics`
    pub fn open_with_metrics(
        config: &RegistryConfig,
        store: Arc<S>,
        metrics: Arc<dyn MetricsRecorder>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let state = populate(config, store.as_ref());
        info!(
            registered = state.len(),
            size_bits = state.filter().size_bits(),
            hash_count = state.filter().hash_count(),
            estimated_fpr = state.filter().false_positive_rate(),
            "Username registry ready"
        );

        Ok(Self {
            state: RwLock::new(state),
            store,
            rules: config.validation,
            metrics,
        })
    }

    /// Validate, then filter, then scan on a filter hit
    fn check_with(&self, state: &RegistryState, name: &str) -> Verdict {
        let start = Instant::now();

        let (verdict, lookup) = match self.rules.check(name) {
            Err(reason) => (Verdict::Invalid(reason), None),
            Ok(()) => {
                let lookup = state.lookup(name);
                let verdict = if lookup.is_found() {
                    Verdict::Taken
                } else {
                    Verdict::Available
                };
                (verdict, Some(lookup))
            }
        };

        self.metrics.record_check(start.elapsed(), lookup);
        if lookup == Some(Lookup::FalsePositive) {
            debug!(username = name, "Filter false positive corrected by scan");
        }
        verdict
    }

    pub fn len(&self) -> usize {
        self.state.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().is_empty()
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn filter_stats(&self) -> FilterStats {
        let state = self.state.read();
        let filter = state.filter();
        FilterStats {
            registered: state.len(),
            size_bits: filter.size_bits(),
            hash_count: filter.hash_count(),
            bits_set: filter.bits_set(),
            fill_ratio: filter.fill_ratio(),
            estimated_fpr: filter.false_positive_rate(),
        }
    }
}

impl<S: NameStore> UsernameApi for UsernameRegistry<S> {
    fn check_username(&self, name: &str) -> Verdict {
        let state = self.state.read();
        self.check_with(&state, name)
    }

    fn add_user(&self, name: &str) -> Registration {
        let mut state = self.state.write();

        let verdict = self.check_with(&state, name);
        if !verdict.is_available() {
            debug!(username = name, reason = %verdict, "Registration rejected");
            return Registration::Rejected(verdict);
        }

        // Persist first: on failure nothing in memory changes
        if let Err(e) = self.store.append(name) {
            error!(username = name, error = %e, "Failed to persist registration");
            self.metrics.record_persist_failure();
            return Registration::StorageFailed(e.to_string());
        }

        state.insert(name.to_string());
        self.metrics.record_registration();
        info!(username = name, registered = state.len(), "Registered username");
        Registration::Registered
    }

    fn registered_count(&self) -> usize {
        self.len()
    }

    fn usernames(&self) -> Vec<String> {
        self.state.read().names().to_vec()
    }

    fn contains_exact(&self, name: &str) -> bool {
        self.state.read().contains_exact(name)
    }
}

/// Build the startup state from the store, topping up with seed names
fn populate<S: NameStore + ?Sized>(config: &RegistryConfig, store: &S) -> RegistryState {
    let (loaded, can_write_back) = match store.load_all() {
        Ok(names) => (names, true),
        Err(StoreError::Missing { path }) => {
            info!(path = %path.display(), "No persisted names found");
            (Vec::new(), true)
        }
        Err(e) => {
            // Rewriting now could clobber data we merely failed to read
            warn!(error = %e, "Could not read persisted names, continuing without them");
            (Vec::new(), false)
        }
    };

    let mut state = RegistryState::new(&config.filter);
    let mut seen: HashSet<String> = HashSet::with_capacity(loaded.len());
    let mut duplicates = 0usize;

    for name in loaded {
        if seen.contains(&name) {
            duplicates += 1;
            continue;
        }
        seen.insert(name.clone());
        state.insert(name);
    }

    if duplicates > 0 {
        warn!(duplicates, "Skipped duplicate names in persisted list");
    }

    let missing = shortfall(state.len(), config.min_registered);
    if missing == 0 {
        return state;
    }

    for name in seed_names(&config.seed_prefix, &seen, missing) {
        state.insert(name);
    }
    info!(
        seeded = missing,
        prefix = %config.seed_prefix,
        registered = state.len(),
        "Seeded placeholder names"
    );

    if can_write_back {
        if let Err(e) = store.replace_all(state.names()) {
            warn!(error = %e, "Could not persist seeded names");
        }
    } else {
        warn!("Seeded names kept in memory only");
    }

    state
}
