//! # Username Registry
//!
//! Username availability checks backed by a Bloom filter pre-filter and an
//! authoritative list of registered names.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `ValidationRules`: Format rules with ordered rejection reasons
//!   - `RegistryState`: Name list plus derived filter, mutated together
//!   - `Verdict` / `Registration`: Total results with user-facing messages
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `UsernameApi`: Driving port (check / register)
//!   - `NameStore`: Driven port (persistence)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `UsernameRegistry`: Implements `UsernameApi`, owns the lock
//!
//! - **Adapters Layer** (`adapters/`): `FileNameStore`, `InMemoryNameStore`
//!
//! - **Diagnostics** (`diagnostics/`): Edge-case battery, performance report
//!
//! ## Check Protocol
//!
//! 1. Validate the format; an invalid name is never looked up
//! 2. Ask the filter; "no" is final
//! 3. On "maybe", scan the full list; only an exact match means taken
//!
//! ## Invariants
//!
//! - Every registered name is in the filter (no false negatives)
//! - The list never holds duplicates
//! - List and filter change together under one write lock
//!
//! ## Usage Example
//!
//! ```
//! use std::sync::Arc;
//! use username_registry::{InMemoryNameStore, RegistryConfig, UsernameApi, UsernameRegistry};
//!
//! let store = Arc::new(InMemoryNameStore::new());
//! let registry = UsernameRegistry::open(&RegistryConfig::for_testing(), store).unwrap();
//!
//! assert_eq!(registry.add_user("alice").into_pair(), (true, "Registration successful!".into()));
//! assert_eq!(registry.check_username("alice").into_pair(), (false, "Username already taken".into()));
//! ```

pub mod adapters;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{FileNameStore, InMemoryNameStore};
pub use bloom_filter::{FilterConfig, FilterConfigError};
pub use config::RegistryConfig;
pub use diagnostics::{compare_performance, run_edge_cases, EdgeCaseReport, PerformanceReport};
pub use domain::{is_valid_username, Registration, ValidationError, ValidationRules, Verdict};
pub use error::{ConfigError, StoreError};
pub use metrics::{MetricsRecorder, MetricsSnapshot, NoOpMetrics, RegistryMetrics};
pub use ports::{NameStore, UsernameApi};
pub use service::{FilterStats, UsernameRegistry};
