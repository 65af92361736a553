//! Inbound Ports (Driving Ports)
//!
//! The request/response API front ends call. Nothing here depends on a UI
//! or event-loop runtime.

use crate::domain::{Registration, Verdict};

/// Primary username API (Driving Port)
pub trait UsernameApi: Send + Sync {
    /// Validate, then run the two-level membership check.
    ///
    /// Never consults the filter for an invalid name.
    fn check_username(&self, name: &str) -> Verdict;

    /// Check, then append to the list, the filter and the store.
    ///
    /// Returns the check's verdict unchanged when the name is not available.
    fn add_user(&self, name: &str) -> Registration;

    /// Number of registered names.
    fn registered_count(&self) -> usize;

    /// Snapshot of registered names in registration order.
    fn usernames(&self) -> Vec<String>;

    /// Pure linear scan of the authoritative list, bypassing the filter.
    fn contains_exact(&self, name: &str) -> bool;
}
