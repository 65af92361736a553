//! Outbound Ports (Driven Ports)
//!
//! The persistence collaborator the registry needs. Keeping it behind a
//! trait lets the core run without touching the filesystem.

use crate::error::StoreError;

/// Durable list of registered names (Driven Port)
///
/// Production: `FileNameStore` (one name per line)
/// Testing: `InMemoryNameStore`
pub trait NameStore: Send + Sync {
    /// Read every persisted name in stored order.
    ///
    /// Returns `StoreError::Missing` when nothing has been persisted yet.
    fn load_all(&self) -> Result<Vec<String>, StoreError>;

    /// Durably append one name.
    ///
    /// When this returns `Ok`, a later `load_all` MUST include the name.
    fn append(&self, name: &str) -> Result<(), StoreError>;

    /// Replace the stored set with `names`, in order.
    fn replace_all(&self, names: &[String]) -> Result<(), StoreError>;
}
