//! Preference store errors.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a preference store cannot be read or written.
///
/// The controller never surfaces these: reads degrade to defaults and
/// writes are dropped. They exist so stores can report what went wrong
/// to the log and to direct callers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage medium does not exist on this host.
    #[error("preference storage is unavailable")]
    Unavailable,

    /// The storage medium rejects writes.
    #[error("preference storage is read-only")]
    ReadOnly,

    /// Reading or writing the backing file failed.
    #[error("failed to access preference file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a JSON object of strings.
    #[error("preference file '{path}' is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_names_path() {
        let err = StoreError::Io {
            path: PathBuf::from("/tmp/prefs.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/prefs.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_simple_variants_display() {
        assert!(StoreError::Unavailable.to_string().contains("unavailable"));
        assert!(StoreError::ReadOnly.to_string().contains("read-only"));
    }
}
