//! Domain Layer - Pure registry logic
//!
//! This layer contains:
//! - Username validation rules
//! - Registry state (authoritative list + filter index)
//! - Check and registration verdicts
//! - Synthetic seed names
//!
//! RULES:
//! - No I/O operations
//! - No locking; the service layer owns synchronization

pub mod registry_state;
pub mod seeding;
pub mod validation;
pub mod verdict;

pub use registry_state::{Lookup, RegistryState};
pub use seeding::{seed_names, shortfall, DEFAULT_MIN_REGISTERED, DEFAULT_SEED_PREFIX};
pub use validation::{is_valid_username, ValidationError, ValidationRules};
pub use verdict::{Registration, Verdict};
