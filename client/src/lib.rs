//! Typed client for the Travel Assistant REST backend.
//!
//! Layers, leaves first: [`storage`] over [`outbound::storage`] backends,
//! [`session`] stores, the [`http`] client core, [`services`] mapping each
//! backend operation to one route, and [`workflows`] pairing service calls
//! with store actions. [`app::TravelApp`] wires them together.

pub mod app;
pub mod config;
pub mod domain;
pub mod http;
pub mod outbound;
pub mod services;
pub mod session;
pub mod storage;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod workflows;

pub use app::{BootstrapError, TravelApp};
pub use config::{ClientSettings, SettingsError};
pub use http::{ApiClient, ClientError};
