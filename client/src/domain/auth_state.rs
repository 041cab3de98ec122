//! Pure authentication state and its transitions.
//!
//! Nothing here touches storage; [`crate::session::AuthStore`] pairs each
//! transition with the matching persistence call.

use super::{User, UserPatch};

/// Who is signed in, if anyone.
///
/// ## Invariants
/// - After [`AuthState::login`], `user` and `token` are set and the state is
///   authenticated.
/// - After [`AuthState::logout`], all three fields are cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    user: Option<User>,
    token: Option<String>,
    is_authenticated: bool,
}

impl AuthState {
    /// Rebuild state from persisted values.
    ///
    /// The authenticated flag is derived: both halves must be present.
    ///
    /// # Examples
    /// ```
    /// use travel_client::domain::AuthState;
    ///
    /// let state = AuthState::restored(None, Some("tok".into()));
    /// assert!(!state.is_authenticated());
    /// ```
    pub fn restored(user: Option<User>, token: Option<String>) -> Self {
        let is_authenticated = user.is_some() && token.is_some();
        Self {
            user,
            token,
            is_authenticated,
        }
    }

    /// Signed-in account.
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Current bearer token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether a session is active.
    pub const fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Record a fresh session.
    pub fn login(&mut self, user: User, token: String) {
        self.user = Some(user);
        self.token = Some(token);
        self.is_authenticated = true;
    }

    /// Forget the session. Idempotent.
    pub fn logout(&mut self) {
        *self = Self::default();
    }

    /// Replace the account and mark the session authenticated.
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
        self.is_authenticated = true;
    }

    /// Replace the token only.
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Merge `patch` into the current account.
    ///
    /// Returns the merged account, or `None` (leaving state untouched) when
    /// nobody is signed in.
    pub fn update_user(&mut self, patch: &UserPatch) -> Option<&User> {
        let merged = self.user.as_ref()?.merged(patch);
        self.user = Some(merged);
        self.user.as_ref()
    }
}
