//! Typed JSON persistence over a [`KeyValueStore`] backend.
//!
//! Failures never propagate as panics or hard errors from the writing side:
//! they are logged and reported as a [`StorageOutcome`] so session actions can
//! keep in-memory state consistent even when the medium misbehaves.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::ports::{KeyValueStore, StorageError};

/// Well-known keys shared with other clients of the same storage.
pub mod keys {
    /// Bearer token.
    pub const TOKEN: &str = "token";
    /// Signed-in account.
    pub const USER: &str = "user";
    /// Active travel request.
    pub const TRAVEL_REQUEST: &str = "travel_request";
    /// Chosen plan.
    pub const SELECTED_PLAN: &str = "selected_plan";
}

/// Which host storage area an adapter writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageScope {
    /// Survives restarts.
    Local,
    /// Lives for the current process only.
    Session,
}

impl StorageScope {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Session => "session",
        }
    }
}

/// Result of a write-side storage call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "inspect or explicitly discard the storage outcome"]
pub enum StorageOutcome {
    /// The backend accepted the change.
    Applied,
    /// The change was not persisted; the failure has already been logged.
    Failed(StorageError),
}

impl StorageOutcome {
    /// Whether the change reached the backend.
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    /// Keep the first failure of two sequential writes.
    pub fn and(self, next: Self) -> Self {
        match self {
            Self::Applied => next,
            failed @ Self::Failed(_) => failed,
        }
    }

    /// Convert into a `Result` for callers that prefer `?`.
    ///
    /// # Errors
    ///
    /// Returns the recorded [`StorageError`] when the write failed.
    pub fn into_result(self) -> Result<(), StorageError> {
        match self {
            Self::Applied => Ok(()),
            Self::Failed(err) => Err(err),
        }
    }
}

impl From<Result<(), StorageError>> for StorageOutcome {
    fn from(result: Result<(), StorageError>) -> Self {
        match result {
            Ok(()) => Self::Applied,
            Err(err) => Self::Failed(err),
        }
    }
}

/// JSON codec in front of a storage backend.
///
/// Cloning shares the backend.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use travel_client::outbound::storage::MemoryKeyValueStore;
/// use travel_client::storage::{StorageAdapter, StorageScope};
///
/// let backend = Arc::new(MemoryKeyValueStore::default());
/// let storage = StorageAdapter::new(backend, StorageScope::Session);
/// assert!(storage.set("answer", &42_u32).is_applied());
/// assert_eq!(storage.get::<u32>("answer"), Some(42));
/// ```
#[derive(Clone)]
pub struct StorageAdapter {
    backend: Arc<dyn KeyValueStore>,
    scope: StorageScope,
}

impl fmt::Debug for StorageAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageAdapter")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

impl StorageAdapter {
    /// Wrap `backend` for the given scope.
    pub fn new(backend: Arc<dyn KeyValueStore>, scope: StorageScope) -> Self {
        Self { backend, scope }
    }

    /// Serialise `value` as JSON and store it under `key`.
    pub fn set<T>(&self, key: &str, value: &T) -> StorageOutcome
    where
        T: Serialize + ?Sized,
    {
        let outcome = serde_json::to_string(value)
            .map_err(|err| StorageError::serialization(err.to_string()))
            .and_then(|encoded| self.backend.write(key, &encoded));
        self.report("set", key, outcome)
    }

    /// Decode the value under `key`.
    ///
    /// Missing keys and undecodable values both yield `None`; the latter is
    /// logged as corruption.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.try_get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    scope = self.scope.as_str(),
                    key,
                    error = %err,
                    "discarding unreadable stored value"
                );
                None
            }
        }
    }

    /// Like [`StorageAdapter::get`] but surfaces failures.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the backend read fails and
    /// [`StorageError::Serialization`] when the stored text is not valid JSON
    /// for `T`.
    pub fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.backend.read(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|err| StorageError::serialization(err.to_string()))
    }

    /// Remove `key`.
    pub fn remove(&self, key: &str) -> StorageOutcome {
        let outcome = self.backend.delete(key);
        self.report("remove", key, outcome)
    }

    /// Remove every key in this scope.
    pub fn clear(&self) -> StorageOutcome {
        let outcome = self.backend.clear();
        self.report("clear", "*", outcome)
    }

    fn report(
        &self,
        op: &'static str,
        key: &str,
        outcome: Result<(), StorageError>,
    ) -> StorageOutcome {
        match &outcome {
            Ok(()) => debug!(scope = self.scope.as_str(), op, key, "storage updated"),
            Err(err) => warn!(
                scope = self.scope.as_str(),
                op,
                key,
                error = %err,
                "storage update failed"
            ),
        }
        outcome.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockKeyValueStore;
    use crate::outbound::storage::MemoryKeyValueStore;
    use mockall::predicate::eq;
    use rstest::{fixture, rstest};
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        title: String,
        pinned: bool,
    }

    #[fixture]
    fn storage() -> StorageAdapter {
        let backend = Arc::new(MemoryKeyValueStore::default());
        StorageAdapter::new(backend, StorageScope::Local)
    }

    #[rstest]
    fn set_then_get_returns_equal_value(storage: StorageAdapter) {
        let note = Note {
            title: "pack passports".to_owned(),
            pinned: true,
        };
        assert!(storage.set("note", &note).is_applied());
        assert_eq!(storage.get::<Note>("note"), Some(note));
    }

    #[rstest]
    fn missing_and_removed_keys_read_as_none(storage: StorageAdapter) {
        assert_eq!(storage.get::<Note>("never-set"), None);
        assert!(storage.set("gone", &1_u8).is_applied());
        assert!(storage.remove("gone").is_applied());
        assert_eq!(storage.get::<u8>("gone"), None);
    }

    #[rstest]
    fn clear_drops_all_keys(storage: StorageAdapter) {
        assert!(storage.set("a", &1_u8).is_applied());
        assert!(storage.set("b", &2_u8).is_applied());
        assert!(storage.clear().is_applied());
        assert_eq!(storage.get::<u8>("a"), None);
        assert_eq!(storage.get::<u8>("b"), None);
    }

    #[test]
    fn corrupt_value_reads_as_none_but_try_get_reports_it() {
        let mut backend = MockKeyValueStore::new();
        backend
            .expect_read()
            .with(eq("user"))
            .returning(|_| Ok(Some("{not json".to_owned())));
        let storage = StorageAdapter::new(Arc::new(backend), StorageScope::Local);

        assert_eq!(storage.get::<Note>("user"), None);
        let err = storage.try_get::<Note>("user").expect_err("corrupt");
        assert!(matches!(err, StorageError::Serialization { .. }));
    }

    #[test]
    fn backend_write_failure_is_reported_not_raised() {
        let mut backend = MockKeyValueStore::new();
        backend
            .expect_write()
            .returning(|_, _| Err(StorageError::backend("quota exceeded")));
        let storage = StorageAdapter::new(Arc::new(backend), StorageScope::Session);

        let outcome = storage.set("token", "abc");
        assert_eq!(
            outcome,
            StorageOutcome::Failed(StorageError::backend("quota exceeded"))
        );
    }

    #[test]
    fn and_keeps_first_failure() {
        let first = StorageOutcome::Failed(StorageError::backend("one"));
        let second = StorageOutcome::Failed(StorageError::backend("two"));
        assert_eq!(
            first.and(second).into_result(),
            Err(StorageError::backend("one"))
        );
        let both = StorageOutcome::Applied.and(StorageOutcome::Applied);
        assert!(both.is_applied());
    }
}
