//! Authoritative name list plus its Bloom filter index
//!
//! INVARIANTS:
//! - No duplicates in `names`
//! - Every name in `names` has been added to `filter` (the filter is a
//!   superset index: false positives allowed, false negatives never)
//!
//! `insert` is the only mutator and updates both halves together.

use bloom_filter::{BloomFilter, FilterConfig};

/// How a lookup against the state was resolved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// Filter said no; no scan needed
    FilterMiss,
    /// Filter said maybe, the scan found nothing
    FalsePositive,
    /// Filter said maybe, the scan found an exact match
    Found,
}

impl Lookup {
    pub fn is_found(self) -> bool {
        self == Lookup::Found
    }
}

/// Registered names in registration order, with a derived filter
#[derive(Clone, Debug)]
pub struct RegistryState {
    names: Vec<String>,
    filter: BloomFilter,
}

impl RegistryState {
    pub fn new(filter_config: &FilterConfig) -> Self {
        Self {
            names: Vec::new(),
            filter: BloomFilter::from_config(filter_config),
        }
    }

    /// Append a name to the list and the filter
    ///
    /// Callers must have ruled out duplicates first.
    pub fn insert(&mut self, name: String) {
        self.filter.add(&name);
        self.names.push(name);
    }

    /// Two-level lookup: filter first, linear scan only on a filter hit
    pub fn lookup(&self, name: &str) -> Lookup {
        if !self.filter.contains(name) {
            return Lookup::FilterMiss;
        }
        if self.contains_exact(name) {
            Lookup::Found
        } else {
            Lookup::FalsePositive
        }
    }

    /// Full linear scan of the authoritative list
    pub fn contains_exact(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn filter(&self) -> &BloomFilter {
        &self.filter
    }
}
