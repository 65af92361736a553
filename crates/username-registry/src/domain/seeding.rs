//! Deterministic placeholder names for an under-populated registry
//!
//! Names are `<prefix><index>` with the index counting up from 0. Any name
//! already registered is skipped, so seeding never introduces duplicates.

use std::collections::HashSet;

/// Default prefix for synthetic names
pub const DEFAULT_SEED_PREFIX: &str = "user";

/// Default registry population guaranteed at startup
pub const DEFAULT_MIN_REGISTERED: usize = 10_000;

/// Generate `count` synthetic names not present in `taken`
pub fn seed_names(prefix: &str, taken: &HashSet<String>, count: usize) -> Vec<String> {
    (0u64..)
        .map(|i| format!("{}{}", prefix, i))
        .filter(|name| !taken.contains(name))
        .take(count)
        .collect()
}

/// Number of names needed to reach `minimum`
pub fn shortfall(current: usize, minimum: usize) -> usize {
    minimum.saturating_sub(current)
}
