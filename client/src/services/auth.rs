//! Authentication endpoints.

use serde::de::IgnoredAny;

use super::endpoints::auth;
use crate::domain::{AuthResponse, LoginRequest, RegisterRequest, TokenRefresh, User, UserPatch};
use crate::http::{ApiClient, ClientError};

/// Typed access to `/auth/*`.
#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    /// Issue calls through `client`.
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ClientError> {
        self.client.post(auth::LOGIN, credentials).await
    }

    /// Create an account and sign in.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn register(&self, account: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        self.client.post(auth::REGISTER, account).await
    }

    /// End the server-side session.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn logout(&self) -> Result<(), ClientError> {
        self.client
            .post_empty::<IgnoredAny>(auth::LOGOUT)
            .await
            .map(|_| ())
    }

    /// Obtain a replacement token.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn refresh_token(&self) -> Result<TokenRefresh, ClientError> {
        self.client.post_empty(auth::REFRESH).await
    }

    /// Fetch the signed-in account.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn get_profile(&self) -> Result<User, ClientError> {
        self.client.get(auth::PROFILE).await
    }

    /// Update profile fields present in `patch`.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn update_profile(&self, patch: &UserPatch) -> Result<User, ClientError> {
        self.client.put(auth::PROFILE, patch).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::HttpMethod;
    use crate::test_support::{ScriptedTransport, sample_user, scripted_client};
    use serde_json::json;

    #[tokio::test]
    async fn login_posts_credentials_and_returns_session() {
        let transport = ScriptedTransport::new();
        transport.reply_data(&json!({ "user": sample_user(), "token": "t-1" }));
        let service = AuthService::new(scripted_client(&transport).expect("client"));

        let session = service
            .login(&LoginRequest {
                email: "lin.wei@example.com".to_owned(),
                password: "secret".to_owned(),
            })
            .await
            .expect("login succeeds");

        assert_eq!(session.token, "t-1");
        assert_eq!(session.user, sample_user());
        let sent = transport.last_request().expect("request sent");
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.url.path(), "/api/v1/auth/login");
    }

    #[tokio::test]
    async fn logout_ignores_any_payload() {
        let transport = ScriptedTransport::new();
        let farewell = json!({ "code": 200, "message": "bye", "data": { "ok": true } });
        transport.reply_json(200, &farewell);
        let service = AuthService::new(scripted_client(&transport).expect("client"));
        service.logout().await.expect("logout succeeds");
        assert!(transport.last_request().expect("sent").body.is_none());
    }

    #[tokio::test]
    async fn update_profile_puts_only_present_fields() {
        let transport = ScriptedTransport::new();
        transport.reply_data(&sample_user());
        let service = AuthService::new(scripted_client(&transport).expect("client"));
        let patch = UserPatch {
            name: Some("Lin".to_owned()),
            ..UserPatch::default()
        };
        service
            .update_profile(&patch)
            .await
            .expect("update succeeds");

        let sent = transport.last_request().expect("sent");
        assert_eq!(sent.method, HttpMethod::Put);
        let body: serde_json::Value =
            serde_json::from_slice(sent.body.as_deref().expect("body")).expect("json body");
        assert_eq!(body, json!({ "name": "Lin" }));
    }
}
