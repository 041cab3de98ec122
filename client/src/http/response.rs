//! Response stage: envelope unwrapping and failure normalisation.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, warn};

use super::ClientError;
use crate::domain::ports::{HttpMethod, TransportError, TransportResponse, UnauthorizedHandler};
use crate::domain::{ApiEnvelope, ApiError};

/// Diagnostic bucket for a non-`2xx` status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    /// `401`: the session is no longer valid.
    Unauthorized,
    /// `403`
    Forbidden,
    /// `404`
    NotFound,
    /// `500`
    ServerError,
    /// Anything else.
    Other,
}

impl StatusCategory {
    /// Bucket `status`.
    pub const fn of(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            500 => Self::ServerError,
            _ => Self::Other,
        }
    }
}

/// Decode a `2xx` body: it must be an envelope with a success code whose
/// `data` fits `T`.
pub(crate) fn unwrap_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<T, ClientError> {
    let envelope: ApiEnvelope = serde_json::from_slice(body)
        .map_err(|err| ClientError::decode(format!("expected response envelope: {err}")))?;
    let data = envelope.into_result()?.unwrap_or(Value::Null);
    serde_json::from_value(data)
        .map_err(|err| ClientError::decode(format!("unexpected payload shape: {err}")))
}

/// Build the normalized error for a non-`2xx` response.
///
/// The body's own `code` wins unless absent or zero; its `message` wins unless
/// blank. The whole body is kept as `details`: parsed JSON when possible,
/// otherwise the raw text.
pub(crate) fn normalize_http_error(status: u16, body: &[u8]) -> ApiError {
    let parsed: Option<Value> = serde_json::from_slice(body).ok();
    let code = parsed
        .as_ref()
        .and_then(|value| value.get("code"))
        .and_then(Value::as_i64)
        .filter(|code| *code != 0)
        .unwrap_or_else(|| i64::from(status));
    let message = parsed
        .as_ref()
        .and_then(|value| value.get("message"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();
    let details = parsed.or_else(|| {
        (!body.is_empty()).then(|| Value::String(String::from_utf8_lossy(body).into_owned()))
    });

    let err = ApiError::new(code, message).with_status(status);
    match details {
        Some(details) => err.with_details(details),
        None => err,
    }
}

/// Failure handling shared by every call.
#[derive(Clone)]
pub(crate) struct ResponseStage {
    unauthorized: Arc<dyn UnauthorizedHandler>,
}

impl fmt::Debug for ResponseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseStage").finish_non_exhaustive()
    }
}

impl ResponseStage {
    pub(crate) fn new(unauthorized: Arc<dyn UnauthorizedHandler>) -> Self {
        Self { unauthorized }
    }

    /// Turn a received response into the caller's payload or an error.
    pub(crate) fn complete<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        response: &TransportResponse,
    ) -> Result<T, ClientError> {
        if !response.is_success() {
            return Err(self.http_failure(method, path, response).into());
        }
        unwrap_envelope(&response.body).inspect_err(|err| {
            if let ClientError::Api(api) = err {
                warn!(
                    %method,
                    path,
                    code = api.code(),
                    message = api.message(),
                    "business failure"
                );
            } else {
                error!(%method, path, error = %err, "malformed response");
            }
        })
    }

    fn http_failure(
        &self,
        method: HttpMethod,
        path: &str,
        response: &TransportResponse,
    ) -> ApiError {
        let status = response.status;
        match StatusCategory::of(status) {
            StatusCategory::Unauthorized => {
                warn!(%method, path, status, "session rejected; evicting credentials");
                self.unauthorized.on_unauthorized();
            }
            StatusCategory::Forbidden => warn!(%method, path, status, "access denied"),
            StatusCategory::NotFound => warn!(%method, path, status, "resource not found"),
            StatusCategory::ServerError => error!(%method, path, status, "server error"),
            StatusCategory::Other => warn!(%method, path, status, "request failed"),
        }
        normalize_http_error(status, &response.body)
    }

    /// Log a transport failure and hand it back unchanged.
    pub(crate) fn transport_failure(
        &self,
        method: HttpMethod,
        path: &str,
        err: TransportError,
    ) -> ClientError {
        if err.is_timeout() {
            warn!(%method, path, error = %err, "request timed out");
        } else {
            error!(%method, path, error = %err, "network failure");
        }
        err.into()
    }
}
