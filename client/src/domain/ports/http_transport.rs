//! Driven port for the HTTP transport underneath the API client.
//!
//! The client core owns URL building, headers, and envelope handling; a
//! transport only moves bytes and reports whether a response arrived.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use super::define_port_error;

/// HTTP verbs used by the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

impl HttpMethod {
    /// Upper-case method name as sent on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully prepared outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// HTTP verb.
    pub method: HttpMethod,
    /// Absolute request URL including query parameters.
    pub url: Url,
    /// Header name/value pairs.
    pub headers: BTreeMap<String, String>,
    /// Encoded request body, if any.
    pub body: Option<Vec<u8>>,
    /// Upper bound on the call duration.
    pub timeout: Duration,
}

impl TransportRequest {
    /// Look up a header value by exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

/// Response that reached the client, successful or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Build a response from a status and body.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for `2xx` statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

define_port_error! {
    /// Failures where no HTTP response reached the client.
    pub enum TransportError {
        /// The call exceeded its timeout.
        Timeout { message: String } =>
            "request timed out: {message}",
        /// Connectivity failed before a response arrived.
        Network { message: String } =>
            "network failure: {message}",
        /// The transport refused to build the request.
        InvalidRequest { message: String } =>
            "transport rejected request: {message}",
    }
}

impl TransportError {
    /// Whether this failure was caused by the timeout bound.
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Port for sending one prepared request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send the request and return whatever response arrived.
    ///
    /// Non-`2xx` statuses are responses, not errors; only failures that
    /// produce no response map to [`TransportError`].
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(200, true)]
    #[case(204, true)]
    #[case(299, true)]
    #[case(199, false)]
    #[case(301, false)]
    #[case(401, false)]
    #[case(500, false)]
    fn success_covers_the_2xx_range(#[case] status: u16, #[case] expected: bool) {
        let response = TransportResponse::new(status, Vec::new());
        assert_eq!(response.is_success(), expected);
    }

    #[test]
    fn only_timeouts_report_as_timeouts() {
        assert!(TransportError::timeout("15000ms elapsed").is_timeout());
        assert!(!TransportError::network("connection refused").is_timeout());
        assert!(!TransportError::invalid_request("bad header").is_timeout());
    }
}
