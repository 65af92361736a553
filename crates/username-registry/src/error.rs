//! Error types for the username registry
//!
//! Availability checks and registrations never return these; they report
//! verdicts instead. These cover the ambient concerns around the core:
//! persistence adapters and configuration.

use std::io;
use std::path::PathBuf;

use bloom_filter::FilterConfigError;
use thiserror::Error;

use crate::domain::ValidationError;

/// Errors from the persistence collaborator
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No persisted names at {}", path.display())]
    Missing { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not lock {}: {source}", path.display())]
    Lock {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Name store unavailable: {0}")]
    Unavailable(String),
}

/// Errors from loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid filter configuration: {0}")]
    Filter(#[from] FilterConfigError),

    #[error("Minimum username length must be at least 1")]
    ZeroMinLength,

    #[error("Invalid username length range: min {min} > max {max}")]
    InvalidLengthRange { min: usize, max: usize },

    #[error("Seed prefix {prefix:?} does not produce valid usernames: {reason}")]
    InvalidSeedPrefix {
        prefix: String,
        reason: ValidationError,
    },

    #[error("Could not read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
