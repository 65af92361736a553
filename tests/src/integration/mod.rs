//! # Integration Flows
//!
//! - `startup_flows`: seeding, reload and recovery over a real names file
//! - `registration_flows`: registrations under contention and filter saturation

pub mod registration_flows;
pub mod startup_flows;
