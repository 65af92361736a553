//! Service Layer
//!
//! Orchestrates domain logic, locking and persistence.

pub mod registry_service;

pub use registry_service::{FilterStats, UsernameRegistry};
