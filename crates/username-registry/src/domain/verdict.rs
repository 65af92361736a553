//! Results of availability checks and registrations
//!
//! Both operations are total: every outcome, including rejections, is a
//! value with a human-readable message rather than an error.

use std::fmt;

use super::validation::ValidationError;

pub const MSG_AVAILABLE: &str = "Username available";
pub const MSG_TAKEN: &str = "Username already taken";
pub const MSG_REGISTERED: &str = "Registration successful!";

/// Outcome of an availability check
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Valid and not registered
    Available,
    /// Confirmed present in the authoritative list
    Taken,
    /// Failed format validation; never looked up
    Invalid(ValidationError),
}

impl Verdict {
    pub fn is_available(&self) -> bool {
        matches!(self, Verdict::Available)
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The `(available, message)` pair shown to users
    pub fn into_pair(self) -> (bool, String) {
        (self.is_available(), self.message())
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Available => f.write_str(MSG_AVAILABLE),
            Verdict::Taken => f.write_str(MSG_TAKEN),
            Verdict::Invalid(reason) => write!(f, "{}", reason),
        }
    }
}

/// Outcome of a registration attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Registration {
    /// Appended to the list, the filter and the store
    Registered,
    /// The availability check said no; carries its verdict unchanged
    Rejected(Verdict),
    /// The store refused the append; nothing was changed
    StorageFailed(String),
}

impl Registration {
    pub fn is_success(&self) -> bool {
        matches!(self, Registration::Registered)
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The `(success, message)` pair shown to users
    pub fn into_pair(self) -> (bool, String) {
        (self.is_success(), self.message())
    }
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Registration::Registered => f.write_str(MSG_REGISTERED),
            Registration::Rejected(verdict) => write!(f, "{}", verdict),
            Registration::StorageFailed(reason) => write!(f, "Registration failed: {}", reason),
        }
    }
}
