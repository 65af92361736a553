//! Username format rules
//!
//! A name is valid iff:
//! - its length (in `char`s) is within `min_len..=max_len`
//! - it contains no whitespace
//! - every char is an ASCII letter, ASCII digit or `_`
//!
//! Rules are checked in a fixed order so callers always see the first
//! failing rule: empty, too short, too long, whitespace, disallowed char.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default minimum username length
pub const DEFAULT_MIN_LEN: usize = 2;

/// Default maximum username length
pub const DEFAULT_MAX_LEN: usize = 50;

/// Why a username was rejected before any lookup
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Username cannot be empty")]
    Empty,

    #[error("Username must be at least {min} characters")]
    TooShort { min: usize },

    #[error("Username cannot exceed {max} characters")]
    TooLong { max: usize },

    #[error("Username cannot contain spaces")]
    ContainsWhitespace,

    #[error("Username can only contain letters, numbers and underscores")]
    DisallowedCharacter { found: char },
}

/// Length limits for usernames
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

impl ValidationRules {
    /// Check a candidate name, reporting the first failing rule
    pub fn check(&self, name: &str) -> Result<(), ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::Empty);
        }

        let len = name.chars().count();
        if len < self.min_len {
            return Err(ValidationError::TooShort { min: self.min_len });
        }
        if len > self.max_len {
            return Err(ValidationError::TooLong { max: self.max_len });
        }

        if name.chars().any(char::is_whitespace) {
            return Err(ValidationError::ContainsWhitespace);
        }

        if let Some(found) = name.chars().find(|c| !is_allowed_char(*c)) {
            return Err(ValidationError::DisallowedCharacter { found });
        }

        Ok(())
    }

    /// Whether the name passes every rule
    pub fn is_valid(&self, name: &str) -> bool {
        self.check(name).is_ok()
    }
}

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Validate against the default 2..=50 rules
pub fn is_valid_username(name: &str) -> bool {
    ValidationRules::default().is_valid(name)
}
