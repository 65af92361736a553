//! Registry builders shared by the integration flows and the benchmarks

use std::sync::Arc;

use bloom_filter::FilterConfig;
use username_registry::{InMemoryNameStore, RegistryConfig, RegistryMetrics, UsernameRegistry};

/// In-memory registry seeded with `user0..user{count}`
pub fn seeded_registry(count: usize, filter: FilterConfig) -> UsernameRegistry<InMemoryNameStore> {
    seeded_registry_with_metrics(count, filter, Arc::new(RegistryMetrics::new()))
}

pub fn seeded_registry_with_metrics(
    count: usize,
    filter: FilterConfig,
    metrics: Arc<RegistryMetrics>,
) -> UsernameRegistry<InMemoryNameStore> {
    let config = RegistryConfig {
        min_registered: count,
        filter,
        ..RegistryConfig::for_testing()
    };
    match UsernameRegistry::open_with_metrics(&config, Arc::new(InMemoryNameStore::new()), metrics)
    {
        Ok(registry) => registry,
        Err(e) => panic!("fixture config rejected: {}", e),
    }
}

/// `count` names that are never produced by seeding
pub fn novel_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("novel_{}", i)).collect()
}
