//! Request interceptor stage.
//!
//! Interceptors run in registration order on the fully resolved request,
//! just before it reaches the transport. The first failure aborts the call.

use std::fmt;
use std::sync::Arc;

use super::ClientError;
use crate::domain::ports::{TokenProvider, TransportRequest};

/// Mutates an outgoing request or vetoes it.
#[cfg_attr(test, mockall::automock)]
pub trait RequestInterceptor: Send + Sync {
    /// Adjust `request` in place.
    ///
    /// # Errors
    ///
    /// Returning an error prevents the request from being sent.
    fn intercept(&self, request: &mut TransportRequest) -> Result<(), ClientError>;
}

/// Adds `Authorization: Bearer <token>` when a token is held.
#[derive(Clone)]
pub struct BearerAuth {
    tokens: Arc<dyn TokenProvider>,
}

impl BearerAuth {
    /// Read tokens from `tokens` on every request.
    pub fn new(tokens: Arc<dyn TokenProvider>) -> Self {
        Self { tokens }
    }
}

impl fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerAuth").finish_non_exhaustive()
    }
}

impl RequestInterceptor for BearerAuth {
    fn intercept(&self, request: &mut TransportRequest) -> Result<(), ClientError> {
        let Some(token) = self.tokens.current_token() else {
            return Ok(());
        };
        if token.is_empty() {
            return Ok(());
        }
        if token.chars().any(|c| c.is_control() || c.is_whitespace()) {
            return Err(ClientError::request(
                "stored token is not a valid header value",
            ));
        }
        request
            .headers
            .insert("Authorization".to_owned(), format!("Bearer {token}"));
        Ok(())
    }
}
