//! Normalized API error.
//!
//! Business failures (an envelope with a non-success `code`) and HTTP
//! failures (a non-`2xx` status) both collapse into [`ApiError`] so callers
//! handle one shape. Transport failures without a response stay separate; see
//! [`crate::domain::ports::TransportError`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message used when the server supplies none.
pub const DEFAULT_ERROR_MESSAGE: &str = "request failed";

/// Uniform error payload surfaced to callers of the service layer.
///
/// ## Invariants
/// - `message` is never empty; blank server messages are replaced with
///   [`DEFAULT_ERROR_MESSAGE`].
/// - `status` is set only for non-`2xx` responses; business failures carried
///   in a success envelope have none.
///
/// # Examples
/// ```
/// use travel_client::domain::{ApiError, DEFAULT_ERROR_MESSAGE};
///
/// let err = ApiError::new(4001, "");
/// assert_eq!(err.code(), 4001);
/// assert_eq!(err.message(), DEFAULT_ERROR_MESSAGE);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{message} (code {code})")]
pub struct ApiError {
    code: i64,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
    #[serde(skip)]
    status: Option<u16>,
}

impl ApiError {
    /// Build an error, substituting the default message for blank input.
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        let raw = message.into();
        let message = if raw.trim().is_empty() {
            DEFAULT_ERROR_MESSAGE.to_owned()
        } else {
            raw
        };
        Self {
            code,
            message,
            details: None,
            status: None,
        }
    }

    /// Server-provided or status-derived error code.
    pub const fn code(&self) -> i64 {
        self.code
    }

    /// Human-readable message suitable for display.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// HTTP status of the response that failed, when the failure was not a
    /// business code inside a success envelope.
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    /// Raw response body captured for HTTP failures.
    pub const fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach the raw response body.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use travel_client::domain::ApiError;
    ///
    /// let err = ApiError::new(404, "plan not found").with_details(json!({ "code": 404 }));
    /// assert!(err.details().is_some());
    /// ```
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Record the HTTP status the error was derived from.
    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}
