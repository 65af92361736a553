//! # Startup Flows
//!
//! Opening a registry over a real names file:
//!
//! 1. **Cold start**: missing file is seeded to the minimum population and written
//! 2. **Warm start**: a second open reads the file back without reseeding
//! 3. **Top-up**: a short file keeps its names and gains only the shortfall
//! 4. **Unreadable file**: seeds stay in memory and the path is left untouched
//! 5. **Hand-edited file**: a last line without a newline survives the next registration

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;
    use std::sync::Arc;

    use username_registry::{
        FileNameStore, NameStore, Registration, RegistryConfig, UsernameApi, UsernameRegistry,
        Verdict,
    };

    fn config_for(path: &std::path::Path, min_registered: usize) -> RegistryConfig {
        RegistryConfig {
            names_file: path.to_path_buf(),
            min_registered,
            ..RegistryConfig::default()
        }
    }

    fn open(config: &RegistryConfig) -> UsernameRegistry<FileNameStore> {
        let store = Arc::new(FileNameStore::new(&config.names_file));
        UsernameRegistry::open(config, store).unwrap()
    }

    #[test]
    fn test_cold_start_seeds_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usernames.csv");
        let config = config_for(&path, 10_000);

        let registry = open(&config);

        assert_eq!(registry.registered_count(), 10_000);
        for i in [0, 1, 4_999, 9_999] {
            assert_eq!(registry.check_username(&format!("user{}", i)), Verdict::Taken);
        }
        assert_eq!(registry.check_username("user10000"), Verdict::Available);

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 10_000);
        assert!(contents.starts_with("user0\nuser1\n"));
        assert!(contents.ends_with("user9999\n"));
    }

    #[test]
    fn test_warm_start_reads_back_without_reseeding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usernames.csv");
        let config = config_for(&path, 500);

        {
            let registry = open(&config);
            assert_eq!(
                registry.add_user("returning_user"),
                Registration::Registered
            );
        }

        let registry = open(&config);

        assert_eq!(registry.registered_count(), 501);
        assert_eq!(registry.check_username("returning_user"), Verdict::Taken);
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 501);
    }

    #[test]
    fn test_short_file_is_topped_up() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usernames.csv");
        fs::write(&path, "alice\r\nuser1\n\nbob\nalice\n").unwrap();

        let registry = open(&config_for(&path, 10));
        let names = registry.usernames();

        assert_eq!(names.len(), 10);
        assert_eq!(&names[..3], &["alice", "user1", "bob"]);
        assert!(!names[3..].contains(&"user1".to_string()));
        assert_eq!(names.iter().collect::<HashSet<_>>().len(), 10);

        let persisted = FileNameStore::new(&path).load_all().unwrap();
        assert_eq!(persisted, names);
    }

    #[test]
    fn test_unreadable_file_is_not_clobbered() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usernames.csv");
        fs::create_dir(&path).unwrap();

        let registry = open(&config_for(&path, 20));

        assert_eq!(registry.registered_count(), 20);
        assert!(path.is_dir());

        let outcome = registry.add_user("fresh_name");
        assert!(matches!(outcome, Registration::StorageFailed(_)));
        assert!(outcome.to_string().starts_with("Registration failed: "));
        assert_eq!(registry.check_username("fresh_name"), Verdict::Available);
        assert_eq!(registry.registered_count(), 20);
    }

    #[test]
    fn test_registration_after_unterminated_last_line_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usernames.csv");
        fs::write(&path, "alice\nbob").unwrap();
        let config = config_for(&path, 0);

        {
            let registry = open(&config);
            assert_eq!(registry.add_user("dave"), Registration::Registered);
        }

        let registry = open(&config);

        assert_eq!(registry.usernames(), vec!["alice", "bob", "dave"]);
        assert_eq!(registry.check_username("bob"), Verdict::Taken);
        assert_eq!(registry.check_username("dave"), Verdict::Taken);
        assert_eq!(fs::read_to_string(&path).unwrap(), "alice\nbob\ndave\n");
    }

    #[test]
    fn test_nested_names_file_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("registry").join("usernames.csv");

        let registry = open(&config_for(&path, 3));

        assert_eq!(registry.registered_count(), 3);
        assert_eq!(fs::read_to_string(&path).unwrap(), "user0\nuser1\nuser2\n");
    }
}
