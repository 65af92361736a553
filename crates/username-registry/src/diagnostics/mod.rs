//! Diagnostics
//!
//! Read-only reports front ends can show next to the check/register
//! actions. Neither is part of the correctness contract.

pub mod edge_cases;
pub mod performance;

pub use edge_cases::{run_edge_cases, EdgeCaseReport, EdgeCaseResult, EDGE_CASES};
pub use performance::{compare_performance, sample_lookups, PerformanceReport};
