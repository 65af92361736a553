use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::error::StoreError;
use crate::ports::outbound::NameStore;

/// In-memory name store for unit tests and tooling.
///
/// `None` means nothing was ever persisted, so `load_all` reports
/// `StoreError::Missing` just like a missing file.
#[derive(Default)]
pub struct InMemoryNameStore {
    names: Mutex<Option<Vec<String>>>,
    fail_appends: AtomicBool,
}

impl InMemoryNameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already-persisted list.
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: Mutex::new(Some(names.into_iter().map(Into::into).collect())),
            fail_appends: AtomicBool::new(false),
        }
    }

    /// Make every subsequent `append` fail.
    pub fn set_fail_appends(&self, fail: bool) {
        self.fail_appends.store(fail, Ordering::SeqCst);
    }

    /// Copy of what is currently persisted.
    pub fn snapshot(&self) -> Vec<String> {
        self.names.lock().clone().unwrap_or_default()
    }
}

impl NameStore for InMemoryNameStore {
    fn load_all(&self) -> Result<Vec<String>, StoreError> {
        self.names
            .lock()
            .clone()
            .ok_or_else(|| StoreError::Missing {
                path: "<memory>".into(),
            })
    }

    fn append(&self, name: &str) -> Result<(), StoreError> {
        if self.fail_appends.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("appends disabled".to_string()));
        }
        self.names
            .lock()
            .get_or_insert_with(Vec::new)
            .push(name.to_string());
        Ok(())
    }

    fn replace_all(&self, names: &[String]) -> Result<(), StoreError> {
        *self.names.lock() = Some(names.to_vec());
        Ok(())
    }
}
