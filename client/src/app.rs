//! Composition root wiring storage, the HTTP client and session hooks.

use std::sync::Arc;

use tracing::info;

use crate::config::{ClientSettings, SettingsError};
use crate::domain::ports::{HttpTransport, KeyValueStore, Navigator, StorageError};
use crate::http::{ApiClient, ClientConfig, ClientError};
use crate::outbound::storage::FileKeyValueStore;
use crate::services::{AuthService, CatalogueService, OrderService, TravelService};
use crate::session::{AuthStore, SessionEvictor, StoredToken, TravelStore};
use crate::storage::{StorageAdapter, StorageScope};
use crate::workflows::{AuthWorkflow, TravelWorkflow};

/// Start-up failure.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// Settings were unusable.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// The persistent storage directory could not be opened.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The HTTP client could not be built.
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// A ready-to-use client: one storage backend, one [`ApiClient`] whose
/// bearer token comes from that storage and whose `401` handler evicts it.
#[derive(Debug, Clone)]
pub struct TravelApp {
    storage: StorageAdapter,
    client: ApiClient,
}

impl TravelApp {
    /// Wire the production stack described by `settings`.
    ///
    /// # Errors
    ///
    /// See [`BootstrapError`].
    pub fn bootstrap(
        settings: &ClientSettings,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, BootstrapError> {
        let storage_dir = settings.storage_dir();
        let backend = FileKeyValueStore::open(&storage_dir)?;
        info!(
            app = settings.app_name(),
            base_url = settings.api_base_url(),
            storage_dir = %storage_dir,
            "client configured"
        );
        let config = settings.client_config()?;
        Self::assemble(config, Arc::new(backend), None, navigator)
    }

    /// Wire from explicit parts; `transport` defaults to reqwest.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::Client`] when the default transport cannot
    /// be built.
    pub fn assemble(
        config: ClientConfig,
        backend: Arc<dyn KeyValueStore>,
        transport: Option<Arc<dyn HttpTransport>>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, BootstrapError> {
        let storage = StorageAdapter::new(backend, StorageScope::Local);
        let mut builder = ApiClient::builder(config)
            .token_provider(Arc::new(StoredToken::new(storage.clone())))
            .on_unauthorized(Arc::new(SessionEvictor::new(storage.clone(), navigator)));
        if let Some(transport) = transport {
            builder = builder.transport(transport);
        }
        Ok(Self {
            storage,
            client: builder.build()?,
        })
    }

    /// Persistent storage shared by the stores.
    pub const fn storage(&self) -> &StorageAdapter {
        &self.storage
    }

    /// The configured client.
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Sign-in flows over a freshly rehydrated [`AuthStore`].
    pub fn auth(&self) -> AuthWorkflow {
        AuthWorkflow::new(
            AuthService::new(self.client.clone()),
            AuthStore::rehydrate(self.storage.clone()),
        )
    }

    /// Planning flows over a freshly rehydrated [`TravelStore`].
    pub fn travel(&self) -> TravelWorkflow {
        TravelWorkflow::new(
            TravelService::new(self.client.clone()),
            TravelStore::rehydrate(self.storage.clone()),
        )
    }

    /// Attraction and restaurant lookups.
    pub fn catalogue(&self) -> CatalogueService {
        CatalogueService::new(self.client.clone())
    }

    /// Order management.
    pub fn orders(&self) -> OrderService {
        OrderService::new(self.client.clone())
    }
}
