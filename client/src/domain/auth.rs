//! Account records exchanged with the authentication endpoints.

use serde::{Deserialize, Serialize};

/// Authenticated account as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login e-mail address.
    pub email: String,
    /// Optional contact number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Creation timestamp as sent by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl User {
    /// Return a copy with every field present in `patch` overwritten.
    ///
    /// # Examples
    /// ```
    /// use travel_client::domain::{User, UserPatch};
    ///
    /// let user = User {
    ///     id: "u-1".into(),
    ///     name: "Lin".into(),
    ///     email: "lin@example.com".into(),
    ///     phone: None,
    ///     created_at: None,
    /// };
    /// let patch = UserPatch { phone: Some("13800000000".into()), ..UserPatch::default() };
    /// let merged = user.merged(&patch);
    /// assert_eq!(merged.name, "Lin");
    /// assert_eq!(merged.phone.as_deref(), Some("13800000000"));
    /// ```
    #[must_use]
    pub fn merged(&self, patch: &UserPatch) -> Self {
        Self {
            id: self.id.clone(),
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            email: patch.email.clone().unwrap_or_else(|| self.email.clone()),
            phone: patch.phone.clone().or_else(|| self.phone.clone()),
            created_at: self.created_at.clone(),
        }
    }
}

/// Partial profile update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New e-mail address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New contact number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Credentials posted to the login endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account e-mail.
    pub email: String,
    /// Plain-text password; sent over TLS only.
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Account creation payload.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name.
    pub name: String,
    /// Account e-mail.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Result of a successful login or registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The authenticated account.
    pub user: User,
    /// Bearer token for subsequent calls.
    pub token: String,
}

/// Result of a token refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRefresh {
    /// Replacement bearer token.
    pub token: String,
}
