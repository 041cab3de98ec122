//! Reaction to a rejected session.

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::ports::{LOGIN_ROUTE, Navigator, UnauthorizedHandler};
use crate::storage::{StorageAdapter, StorageOutcome, keys};

/// Removes the persisted `token` and `user`, then sends the user to
/// [`LOGIN_ROUTE`].
#[derive(Clone)]
pub struct SessionEvictor {
    storage: StorageAdapter,
    navigator: Arc<dyn Navigator>,
}

impl SessionEvictor {
    /// Evict from `storage` and redirect through `navigator`.
    pub fn new(storage: StorageAdapter, navigator: Arc<dyn Navigator>) -> Self {
        Self { storage, navigator }
    }
}

impl fmt::Debug for SessionEvictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionEvictor")
            .field("storage", &self.storage)
            .finish_non_exhaustive()
    }
}

impl UnauthorizedHandler for SessionEvictor {
    fn on_unauthorized(&self) {
        let outcome = self
            .storage
            .remove(keys::TOKEN)
            .and(self.storage.remove(keys::USER));
        if let StorageOutcome::Failed(err) = outcome {
            warn!(error = %err, "stale credentials may remain after eviction");
        }
        self.navigator.navigate(LOGIN_ROUTE);
    }
}

/// Navigator for headless front ends: records the redirect in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, route: &str) {
        info!(route, "navigation requested");
    }
}
