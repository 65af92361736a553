//! # Registry Configuration
//!
//! Sources, lowest to highest precedence: defaults, an optional JSON file,
//! environment variables. Front ends apply their own flags on top.

use std::path::{Path, PathBuf};

use bloom_filter::FilterConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{ValidationRules, DEFAULT_MIN_REGISTERED, DEFAULT_SEED_PREFIX};
use crate::error::ConfigError;

/// Environment variable overriding `names_file`
pub const ENV_NAMES_FILE: &str = "UC_NAMES_FILE";
/// Environment variable overriding `min_registered`
pub const ENV_MIN_REGISTERED: &str = "UC_MIN_REGISTERED";
/// Environment variable overriding `filter.size_bits`
pub const ENV_FILTER_BITS: &str = "UC_FILTER_BITS";

/// Username registry configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Text file holding one registered name per line.
    pub names_file: PathBuf,

    /// Population guaranteed at startup; shortfalls are seeded.
    pub min_registered: usize,

    /// Prefix for synthetic seed names.
    pub seed_prefix: String,

    /// Username length limits.
    pub validation: ValidationRules,

    /// Bloom filter sizing.
    pub filter: FilterConfig,

    /// Existing and novel lookups each in the performance report.
    pub performance_samples: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            names_file: PathBuf::from("usernames.csv"),
            min_registered: DEFAULT_MIN_REGISTERED,
            seed_prefix: DEFAULT_SEED_PREFIX.to_string(),
            validation: ValidationRules::default(),
            filter: FilterConfig::default(),
            performance_samples: 50,
        }
    }
}

impl RegistryConfig {
    /// Create a config for testing (no seeding, small filter).
    pub fn for_testing() -> Self {
        Self {
            min_registered: 0,
            filter: FilterConfig {
                size_bits: 8192,
                hash_count: 2,
            },
            ..Self::default()
        }
    }

    /// Load from a JSON file; missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `UC_*` environment overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup (environment, tests).
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_NAMES_FILE) {
            self.names_file = PathBuf::from(path);
        }

        if let Some(raw) = lookup(ENV_MIN_REGISTERED) {
            match raw.parse() {
                Ok(n) => self.min_registered = n,
                Err(_) => warn!(value = %raw, "{} must be a non-negative integer", ENV_MIN_REGISTERED),
            }
        }

        if let Some(raw) = lookup(ENV_FILTER_BITS) {
            match raw.parse() {
                Ok(bits) => self.filter.size_bits = bits,
                Err(_) => warn!(value = %raw, "{} must be a positive integer", ENV_FILTER_BITS),
            }
        }
    }

    /// Reject settings the registry cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.filter.validate()?;

        if self.validation.min_len == 0 {
            return Err(ConfigError::ZeroMinLength);
        }
        if self.validation.min_len > self.validation.max_len {
            return Err(ConfigError::InvalidLengthRange {
                min: self.validation.min_len,
                max: self.validation.max_len,
            });
        }

        // The first and the last seed name must both pass validation
        let last_index = self.min_registered.saturating_sub(1);
        for probe in [format!("{}0", self.seed_prefix), format!("{}{}", self.seed_prefix, last_index)] {
            if let Err(reason) = self.validation.check(&probe) {
                return Err(ConfigError::InvalidSeedPrefix {
                    prefix: self.seed_prefix.clone(),
                    reason,
                });
            }
        }

        Ok(())
    }
}
