//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod http_transport;
mod key_value_store;
mod session_hooks;

#[cfg(test)]
pub use http_transport::MockHttpTransport;
pub use http_transport::{
    HttpMethod, HttpTransport, TransportError, TransportRequest, TransportResponse,
};
#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
pub use key_value_store::{KeyValueStore, StorageError};
#[cfg(test)]
pub use session_hooks::{MockNavigator, MockTokenProvider, MockUnauthorizedHandler};
pub use session_hooks::{
    IgnoreUnauthorized, LOGIN_ROUTE, Navigator, NoToken, TokenProvider, UnauthorizedHandler,
};
