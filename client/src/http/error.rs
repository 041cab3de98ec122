//! Error returned by every [`super::ApiClient`] call.

use crate::domain::ApiError;
use crate::domain::ports::TransportError;

/// Why an API call produced no payload.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// Business failure or non-`2xx` status, normalized.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// No response arrived; the transport's error is preserved as-is.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The request was never sent.
    #[error("request not sent: {message}")]
    Request {
        /// What went wrong while preparing the request.
        message: String,
    },
    /// The response arrived but did not match the expected shape.
    #[error("response could not be decoded: {message}")]
    Decode {
        /// Decoder diagnostic.
        message: String,
    },
}

impl ClientError {
    /// Preparation failure.
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
        }
    }

    /// Decoding failure.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// The normalized API error, when this is one.
    pub const fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Whether the response carried HTTP status `401`, the status that
    /// evicts the session. Business codes inside the body are ignored.
    pub fn is_unauthorized(&self) -> bool {
        self.as_api().and_then(ApiError::status) == Some(401)
    }

    /// Whether the call hit its timeout.
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_display_unchanged() {
        let inner = TransportError::timeout("deadline elapsed");
        let err = ClientError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
        assert!(err.is_timeout());
    }

    #[test]
    fn unauthorized_is_read_from_the_http_status() {
        let rejected = ApiError::new(40_101, "token expired").with_status(401);
        assert!(ClientError::from(rejected).is_unauthorized());
        let forbidden = ApiError::new(401, "forbidden").with_status(403);
        assert!(!ClientError::from(forbidden).is_unauthorized());
        let business = ApiError::new(401, "business");
        assert!(!ClientError::from(business).is_unauthorized());
        assert!(!ClientError::decode("bad json").is_unauthorized());
    }
}
