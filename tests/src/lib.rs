//! # Username Registry Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Registry builders shared by tests and benches
//! └── integration/      # End-to-end flows over the file-backed store
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p registry-tests
//!
//! # By category
//! cargo test -p registry-tests integration::
//!
//! # Benchmarks
//! cargo bench -p registry-tests
//! ```

pub mod fixtures;
pub mod integration;
