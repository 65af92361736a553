//! Adapters Layer
//!
//! Implementations of the `NameStore` port.

mod file_store;
mod memory_store;

pub use file_store::FileNameStore;
pub use memory_store::InMemoryNameStore;
