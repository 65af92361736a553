//! # Registration Flows
//!
//! 1. **Contention**: many threads racing on overlapping names over one file
//! 2. **Saturated filter**: the scan keeps verdicts exact when the filter is full
//! 3. **Mixed traffic**: checks run alongside registrations without torn reads

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;
    use std::sync::Arc;
    use std::thread;

    use bloom_filter::FilterConfig;
    use parking_lot::Mutex;
    use username_registry::{
        FileNameStore, Registration, RegistryConfig, RegistryMetrics, UsernameApi,
        UsernameRegistry, Verdict,
    };

    use crate::fixtures::{novel_names, seeded_registry, seeded_registry_with_metrics};

    #[test]
    fn test_racing_registrations_persist_each_name_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usernames.csv");
        let config = RegistryConfig {
            names_file: path.clone(),
            ..RegistryConfig::for_testing()
        };
        let registry =
            UsernameRegistry::open(&config, Arc::new(FileNameStore::new(&path))).unwrap();
        let winners = Mutex::new(Vec::new());

        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for i in 0..25 {
                        let name = format!("racer_{}", i);
                        if registry.add_user(&name) == Registration::Registered {
                            winners.lock().push(name);
                        }
                    }
                });
            }
        });

        let winners = winners.into_inner();
        assert_eq!(winners.len(), 25);
        assert_eq!(registry.registered_count(), 25);

        let persisted: Vec<String> = fs::read_to_string(&path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        assert_eq!(persisted.len(), 25);
        assert_eq!(persisted.iter().collect::<HashSet<_>>().len(), 25);
    }

    #[test]
    fn test_saturated_filter_stays_exact() {
        let metrics = Arc::new(RegistryMetrics::new());
        let registry =
            seeded_registry_with_metrics(10_000, FilterConfig::reference(), metrics.clone());

        let stats = registry.filter_stats();
        assert_eq!(stats.size_bits, 1000);
        assert!(stats.fill_ratio > 0.99);

        for name in novel_names(200) {
            assert_eq!(registry.check_username(&name), Verdict::Available);
        }
        assert_eq!(registry.check_username("user42"), Verdict::Taken);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.checks_performed, 201);
        assert!(snapshot.false_positives >= 190);
        assert_eq!(snapshot.confirmed_taken, 1);
    }

    #[test]
    fn test_default_sizing_rarely_scans() {
        let metrics = Arc::new(RegistryMetrics::new());
        let registry =
            seeded_registry_with_metrics(10_000, FilterConfig::default(), metrics.clone());

        for name in novel_names(1_000) {
            assert_eq!(registry.check_username(&name), Verdict::Available);
        }

        let snapshot = metrics.snapshot();
        assert!(snapshot.filter_misses >= 950);
        assert!(snapshot.false_positives <= 50);
    }

    #[test]
    fn test_checks_alongside_registrations() {
        let registry = seeded_registry(1_000, FilterConfig::default());

        thread::scope(|s| {
            s.spawn(|| {
                for i in 0..200 {
                    assert_eq!(
                        registry.add_user(&format!("late_{}", i)),
                        Registration::Registered
                    );
                }
            });
            for _ in 0..4 {
                s.spawn(|| {
                    for i in 0..1_000 {
                        assert_eq!(
                            registry.check_username(&format!("user{}", i)),
                            Verdict::Taken
                        );
                    }
                });
            }
        });

        assert_eq!(registry.registered_count(), 1_200);
        for i in 0..200 {
            assert_eq!(
                registry.check_username(&format!("late_{}", i)),
                Verdict::Taken
            );
        }
    }
}
