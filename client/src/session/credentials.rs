//! Token lookup backed by persisted session storage.

use crate::domain::ports::TokenProvider;
use crate::storage::{StorageAdapter, keys};

/// Reads the `token` key on every call, so a token written by
/// [`super::AuthStore`] is picked up by the very next request.
#[derive(Debug, Clone)]
pub struct StoredToken {
    storage: StorageAdapter,
}

impl StoredToken {
    /// Read tokens from `storage`.
    pub const fn new(storage: StorageAdapter) -> Self {
        Self { storage }
    }
}

impl TokenProvider for StoredToken {
    fn current_token(&self) -> Option<String> {
        self.storage.get::<String>(keys::TOKEN)
    }
}
