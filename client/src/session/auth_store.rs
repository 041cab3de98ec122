//! Persisted authentication session.

use tracing::info;

use crate::domain::{AuthState, User, UserPatch};
use crate::storage::{StorageAdapter, StorageOutcome, keys};

/// [`AuthState`] mirrored to storage under `user` and `token`.
///
/// Every action applies the in-memory transition and persists the matching
/// keys; the returned [`StorageOutcome`] reports the write. In-memory state
/// is updated even when persistence fails.
#[derive(Debug, Clone)]
pub struct AuthStore {
    state: AuthState,
    storage: StorageAdapter,
}

impl AuthStore {
    /// Load the persisted session; missing or corrupt keys read as signed out.
    pub fn rehydrate(storage: StorageAdapter) -> Self {
        let state = AuthState::restored(storage.get(keys::USER), storage.get(keys::TOKEN));
        Self { state, storage }
    }

    /// Current state.
    pub const fn state(&self) -> &AuthState {
        &self.state
    }

    /// Signed-in account.
    pub const fn user(&self) -> Option<&User> {
        self.state.user()
    }

    /// Whether a session is active.
    pub const fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    /// Start a session.
    pub fn login(&mut self, user: User, token: String) -> StorageOutcome {
        info!(user_id = %user.id, "session started");
        let user_written = self.storage.set(keys::USER, &user);
        let token_written = self.storage.set(keys::TOKEN, &token);
        self.state.login(user, token);
        user_written.and(token_written)
    }

    /// End the session. Safe to repeat.
    pub fn logout(&mut self) -> StorageOutcome {
        self.state.logout();
        info!("session ended");
        self.storage
            .remove(keys::USER)
            .and(self.storage.remove(keys::TOKEN))
    }

    /// Replace the account; marks the session authenticated.
    pub fn set_user(&mut self, user: User) -> StorageOutcome {
        let outcome = self.storage.set(keys::USER, &user);
        self.state.set_user(user);
        outcome
    }

    /// Replace the token only.
    pub fn set_token(&mut self, token: String) -> StorageOutcome {
        let outcome = self.storage.set(keys::TOKEN, &token);
        self.state.set_token(token);
        outcome
    }

    /// Merge `patch` into the account.
    ///
    /// Returns `None` without touching storage when nobody is signed in.
    pub fn update_user(&mut self, patch: &UserPatch) -> Option<StorageOutcome> {
        let merged = self.state.update_user(patch)?;
        Some(self.storage.set(keys::USER, merged))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockKeyValueStore, StorageError};
    use crate::outbound::storage::MemoryKeyValueStore;
    use crate::storage::StorageScope;
    use crate::test_support::sample_user;
    use rstest::{fixture, rstest};
    use std::sync::Arc;

    #[fixture]
    fn storage() -> StorageAdapter {
        StorageAdapter::new(Arc::<MemoryKeyValueStore>::default(), StorageScope::Local)
    }

    #[rstest]
    fn login_persists_and_logout_clears(storage: StorageAdapter) {
        let mut store = AuthStore::rehydrate(storage.clone());
        assert!(store.login(sample_user(), "t-1".to_owned()).is_applied());
        assert!(store.is_authenticated());
        assert_eq!(storage.get::<String>(keys::TOKEN).as_deref(), Some("t-1"));
        assert_eq!(storage.get::<User>(keys::USER), Some(sample_user()));

        assert!(store.logout().is_applied());
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
        assert_eq!(storage.get::<String>(keys::TOKEN), None);
        assert_eq!(storage.get::<User>(keys::USER), None);
    }

    #[rstest]
    fn rehydrate_restores_the_session(storage: StorageAdapter) {
        let mut first = AuthStore::rehydrate(storage.clone());
        assert!(first.login(sample_user(), "t-2".to_owned()).is_applied());

        let second = AuthStore::rehydrate(storage);
        assert!(second.is_authenticated());
        assert_eq!(second.state().token(), Some("t-2"));
    }

    #[rstest]
    fn rehydrate_with_corrupt_user_is_signed_out(storage: StorageAdapter) {
        assert!(storage.set(keys::USER, "not a user object").is_applied());
        assert!(storage.set(keys::TOKEN, "t-3").is_applied());
        let store = AuthStore::rehydrate(storage);
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
    }

    #[test]
    fn update_user_without_session_never_writes() {
        let mut backend = MockKeyValueStore::new();
        backend.expect_read().returning(|_| Ok(None));
        backend.expect_write().never();
        let mut store = AuthStore::rehydrate(StorageAdapter::new(
            Arc::new(backend),
            StorageScope::Local,
        ));

        let patch = UserPatch {
            name: Some("x".to_owned()),
            ..UserPatch::default()
        };
        assert!(store.update_user(&patch).is_none());
        assert!(store.user().is_none());
    }

    #[rstest]
    fn update_user_persists_merged_account(storage: StorageAdapter) {
        let mut store = AuthStore::rehydrate(storage.clone());
        assert!(store.login(sample_user(), "t".to_owned()).is_applied());
        let patch = UserPatch {
            phone: Some("13800000000".to_owned()),
            ..UserPatch::default()
        };
        let outcome = store.update_user(&patch).expect("user present");
        assert!(outcome.is_applied());
        let stored: User = storage.get(keys::USER).expect("user persisted");
        assert_eq!(stored.phone.as_deref(), Some("13800000000"));
        assert_eq!(stored.name, sample_user().name);
    }

    #[test]
    fn failed_persistence_still_updates_memory() {
        let mut backend = MockKeyValueStore::new();
        backend.expect_read().returning(|_| Ok(None));
        backend
            .expect_write()
            .returning(|_, _| Err(StorageError::backend("disk full")));
        let mut store = AuthStore::rehydrate(StorageAdapter::new(
            Arc::new(backend),
            StorageScope::Local,
        ));

        let outcome = store.login(sample_user(), "t".to_owned());
        assert!(!outcome.is_applied());
        assert!(store.is_authenticated());
    }
}
