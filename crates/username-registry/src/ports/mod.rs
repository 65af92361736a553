//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - API for front ends
//! - Driven Ports (outbound) - Persistence the registry depends on

pub mod inbound;
pub mod outbound;

pub use inbound::UsernameApi;
pub use outbound::NameStore;
