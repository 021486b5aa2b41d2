//! In-process preference store.

use std::collections::BTreeMap;

use super::error::StoreError;
use super::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Access {
    #[default]
    ReadWrite,
    ReadOnly,
    Unavailable,
}

/// A string map held in memory.
///
/// Besides the ordinary read-write store, two degraded flavors model the
/// failure modes of browser local storage: a write-protected store (quota
/// exceeded, private browsing) and one that is missing altogether.
///
/// # Example
///
/// ```rust
/// use skinswitch::{MemoryStore, PreferenceStore};
///
/// let mut store = MemoryStore::new();
/// store.set("theme", "dark").unwrap();
/// assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
///
/// let mut locked = MemoryStore::read_only();
/// assert!(locked.set("theme", "dark").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    access: Access,
}

impl MemoryStore {
    /// Creates an empty read-write store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that can be read but rejects every write.
    pub fn read_only() -> Self {
        Self {
            access: Access::ReadOnly,
            ..Self::default()
        }
    }

    /// Creates a store whose reads and writes all fail.
    pub fn unavailable() -> Self {
        Self {
            access: Access::Unavailable,
            ..Self::default()
        }
    }

    /// Adds an entry directly, bypassing the access mode.
    ///
    /// Seeds a store with values left by an earlier session.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Makes every subsequent write fail, keeping current entries readable.
    pub fn lock(&mut self) {
        if self.access == Access::ReadWrite {
            self.access = Access::ReadOnly;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self.access {
            Access::Unavailable => Err(StoreError::Unavailable),
            _ => Ok(self.entries.get(key).cloned()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match self.access {
            Access::Unavailable => Err(StoreError::Unavailable),
            Access::ReadOnly => Err(StoreError::ReadOnly),
            Access::ReadWrite => {
                self.entries.insert(key.to_string(), value.to_string());
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = MemoryStore::new();
        store.set("theme", "light").unwrap();
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_read_only_keeps_seeded_entries() {
        let mut store = MemoryStore::read_only().with_entry("skinColor", "#37b182");
        assert!(matches!(store.set("skinColor", "#ec1839"), Err(StoreError::ReadOnly)));
        assert_eq!(store.get("skinColor").unwrap().as_deref(), Some("#37b182"));
    }

    #[test]
    fn test_unavailable_fails_everything() {
        let mut store = MemoryStore::unavailable();
        assert!(matches!(store.get("theme"), Err(StoreError::Unavailable)));
        assert!(matches!(store.set("theme", "dark"), Err(StoreError::Unavailable)));
    }

    #[test]
    fn test_lock_blocks_writes() {
        let mut store = MemoryStore::new();
        store.set("theme", "dark").unwrap();
        store.lock();
        assert!(store.set("theme", "light").is_err());
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }
}
