//! Sign-in flows: a service call followed by the matching store action.

use tracing::warn;

use super::note_persistence;
use crate::domain::{LoginRequest, RegisterRequest, User, UserPatch};
use crate::http::ClientError;
use crate::services::AuthService;
use crate::session::AuthStore;

/// Couples [`AuthService`] with the persisted [`AuthStore`].
///
/// A call answered with HTTP `401` signs the store out, mirroring the
/// eviction the client already applied to storage. Calls made through other
/// services do not reach this store; rehydrate a fresh workflow after one of
/// them reports [`ClientError::is_unauthorized`].
#[derive(Debug)]
pub struct AuthWorkflow {
    service: AuthService,
    store: AuthStore,
}

impl AuthWorkflow {
    /// Drive `store` with results from `service`.
    pub const fn new(service: AuthService, store: AuthStore) -> Self {
        Self { service, store }
    }

    /// Session state after the last action.
    pub const fn store(&self) -> &AuthStore {
        &self.store
    }

    /// Sign in and persist the session.
    ///
    /// # Errors
    ///
    /// Returns the service error. A `401` signs the store out; any other
    /// failure leaves it unchanged.
    pub async fn login(&mut self, credentials: &LoginRequest) -> Result<&User, ClientError> {
        let result = self.service.login(credentials).await;
        let session = self.settle(result)?;
        note_persistence("login", self.store.login(session.user, session.token));
        self.current_user()
    }

    /// Create an account, sign in and persist the session.
    ///
    /// # Errors
    ///
    /// Returns the service error. A `401` signs the store out; any other
    /// failure leaves it unchanged.
    pub async fn register(&mut self, account: &RegisterRequest) -> Result<&User, ClientError> {
        let result = self.service.register(account).await;
        let session = self.settle(result)?;
        note_persistence("register", self.store.login(session.user, session.token));
        self.current_user()
    }

    /// Sign out remotely, then locally.
    ///
    /// The local session is cleared even when the remote call fails.
    ///
    /// # Errors
    ///
    /// Returns the remote error after the local session has been cleared.
    pub async fn logout(&mut self) -> Result<(), ClientError> {
        let remote = self.service.logout().await;
        if let Err(err) = &remote {
            warn!(error = %err, "remote logout failed; clearing local session anyway");
        }
        note_persistence("logout", self.store.logout());
        remote
    }

    /// Re-fetch the account and store it.
    ///
    /// # Errors
    ///
    /// Returns the service error. A `401` signs the store out; any other
    /// failure leaves it unchanged.
    pub async fn refresh_profile(&mut self) -> Result<&User, ClientError> {
        let result = self.service.get_profile().await;
        let user = self.settle(result)?;
        note_persistence("refresh_profile", self.store.set_user(user));
        self.current_user()
    }

    /// Update the account remotely and store the server's version.
    ///
    /// # Errors
    ///
    /// Returns the service error. A `401` signs the store out; any other
    /// failure leaves it unchanged.
    pub async fn update_profile(&mut self, patch: &UserPatch) -> Result<&User, ClientError> {
        let result = self.service.update_profile(patch).await;
        let user = self.settle(result)?;
        note_persistence("update_profile", self.store.set_user(user));
        self.current_user()
    }

    /// Rotate the token and store it.
    ///
    /// # Errors
    ///
    /// Returns the service error. A `401` signs the store out; any other
    /// failure leaves it unchanged.
    pub async fn refresh_token(&mut self) -> Result<(), ClientError> {
        let result = self.service.refresh_token().await;
        let refreshed = self.settle(result)?;
        note_persistence("refresh_token", self.store.set_token(refreshed.token));
        Ok(())
    }

    /// Sign the store out when the backend rejected the session.
    fn settle<T>(&mut self, result: Result<T, ClientError>) -> Result<T, ClientError> {
        if result.as_ref().is_err_and(ClientError::is_unauthorized) {
            note_persistence("evict", self.store.logout());
        }
        result
    }

    fn current_user(&self) -> Result<&User, ClientError> {
        self.store
            .user()
            .ok_or_else(|| ClientError::decode("session holds no user after update"))
    }
}
