//! Driven port for the host key-value storage backing the session stores.
//!
//! Backends store opaque text values; JSON encoding lives one layer up in
//! [`crate::storage::StorageAdapter`] so backends stay format agnostic.

use super::define_port_error;

define_port_error! {
    /// Errors surfaced by key-value storage backends.
    pub enum StorageError {
        /// The backend could not read or write its medium.
        Backend { message: String } =>
            "storage backend failure: {message}",
        /// A value could not be encoded to, or decoded from, its text form.
        Serialization { message: String } =>
            "storage serialisation failed: {message}",
    }
}

/// Synchronous string key-value storage provided by the host environment.
///
/// Every operation completes in-process; implementations must never block on
/// network I/O.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw text stored under `key`, or `None` when it is absent.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Remove every key held by this backend.
    fn clear(&self) -> Result<(), StorageError>;
}
