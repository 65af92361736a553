//! Fixed battery of boundary inputs run through `check_username`

use std::fmt;

use serde::Serialize;

use crate::ports::UsernameApi;

/// `(input, label)` pairs, in display order
pub const EDGE_CASES: &[(&str, &str)] = &[
    ("", "Empty string"),
    ("a", "Single character"),
    ("username with spaces", "Contains spaces"),
    (
        "abcdefghijklmnopqrstuvwxyzabcdefghijklmnopqrstuvwxy",
        "Too long (51 chars)",
    ),
    ("user@name", "Contains special char (@)"),
    ("user_name", "Valid with underscore"),
    ("username123", "Valid with numbers"),
    ("USERNAME", "Valid uppercase"),
    ("username", "Valid lowercase"),
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EdgeCaseResult {
    pub label: String,
    pub input: String,
    pub available: bool,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EdgeCaseReport {
    pub results: Vec<EdgeCaseResult>,
}

impl fmt::Display for EdgeCaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Edge Case Test Results:")?;
        writeln!(f)?;
        for result in &self.results {
            writeln!(f, "{}: {}", result.label, result.message)?;
        }
        Ok(())
    }
}

/// Run every entry of [`EDGE_CASES`] through the check
pub fn run_edge_cases<A: UsernameApi + ?Sized>(api: &A) -> EdgeCaseReport {
    let results = EDGE_CASES
        .iter()
        .map(|(input, label)| {
            let (available, message) = api.check_username(input).into_pair();
            EdgeCaseResult {
                label: label.to_string(),
                input: input.to_string(),
                available,
                message,
            }
        })
        .collect();

    EdgeCaseReport { results }
}
