//! Session stores and the hooks that tie them to the HTTP client.

mod auth_store;
mod credentials;
mod eviction;
mod travel_store;

pub use auth_store::AuthStore;
pub use credentials::StoredToken;
pub use eviction::{LoggingNavigator, SessionEvictor};
pub use travel_store::TravelStore;
