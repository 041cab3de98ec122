//! Standard response envelope wrapping every backend payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ApiError;

/// Business codes the backend uses to signal success.
///
/// Both values are live: some services answer `200`, others `0`.
pub const SUCCESS_CODES: [i64; 2] = [200, 0];

/// `{ code, message, data }` wrapper returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T = Value> {
    /// Business status code.
    pub code: i64,
    /// Server message; may be absent or empty.
    #[serde(default)]
    pub message: Option<String>,
    /// Payload; absent for operations without a result.
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Whether `code` is one of [`SUCCESS_CODES`].
    pub fn is_success(&self) -> bool {
        SUCCESS_CODES.contains(&self.code)
    }

    /// Split the envelope into its payload or a normalized business error.
    ///
    /// # Examples
    /// ```
    /// use travel_client::domain::ApiEnvelope;
    ///
    /// let ok: ApiEnvelope<u32> = ApiEnvelope { code: 0, message: None, data: Some(7) };
    /// assert_eq!(ok.into_result().ok(), Some(Some(7)));
    ///
    /// let failed: ApiEnvelope<u32> = ApiEnvelope { code: 1002, message: None, data: None };
    /// assert_eq!(failed.into_result().err().map(|e| e.code()), Some(1002));
    /// ```
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(ApiError::new(self.code, self.message.unwrap_or_default()))
        }
    }
}
