//! Callbacks the HTTP client uses to reach session state.
//!
//! The client never touches storage directly: it asks a [`TokenProvider`] for
//! the bearer credential and tells an [`UnauthorizedHandler`] when the backend
//! answers `401`.

/// Route the presentation layer treats as the login entry point.
pub const LOGIN_ROUTE: &str = "/login";

/// Source of the bearer token attached to outgoing requests.
#[cfg_attr(test, mockall::automock)]
pub trait TokenProvider: Send + Sync {
    /// Return the current token, if one is held. Must not block.
    fn current_token(&self) -> Option<String>;
}

/// Token provider for anonymous clients.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoToken;

impl TokenProvider for NoToken {
    fn current_token(&self) -> Option<String> {
        None
    }
}

/// Reaction to a `401 Unauthorized` response.
#[cfg_attr(test, mockall::automock)]
pub trait UnauthorizedHandler: Send + Sync {
    /// Invoked once per `401` response, before the call's error is returned.
    fn on_unauthorized(&self);
}

/// Handler that leaves session state untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreUnauthorized;

impl UnauthorizedHandler for IgnoreUnauthorized {
    fn on_unauthorized(&self) {}
}

/// Presentation-layer navigation.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Move the user to `route`.
    fn navigate(&self, route: &str);
}
