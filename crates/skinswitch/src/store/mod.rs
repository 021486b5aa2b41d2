//! Persistent key-value storage for preferences.
//!
//! This module provides:
//!
//! - [`PreferenceStore`]: String-keyed, string-valued, fallible storage
//! - [`MemoryStore`]: In-process map with degraded flavors for testing
//! - [`FileStore`]: JSON file on disk, the native counterpart of local storage
//! - [`StoreError`]: Why a read or write failed

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Client-side key-value storage that survives reloads.
///
/// Implementations report failures; callers decide whether to care. The
/// preference controller treats every failure as best-effort and moves on.
pub trait PreferenceStore {
    /// Reads a value. `Ok(None)` means the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
