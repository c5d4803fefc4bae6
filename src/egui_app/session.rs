//! Session Context
//!
//! Holds the bearer token issued by the backend. The context is owned by
//! [`AppState`](crate::egui_app::AppState) and lent to components, it is
//! never reached through a global. It starts out unauthenticated and goes
//! back to that state on logout.

/// Authentication context shared by the city view and the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    token: Option<String>,
    expires_in_ms: Option<i64>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current token, `None` when unauthenticated.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Lifetime reported by the server when the token was issued.
    pub fn expires_in_ms(&self) -> Option<i64> {
        self.expires_in_ms
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.set_session(token, None);
    }

    pub fn set_session(&mut self, token: impl Into<String>, expires_in_ms: Option<i64>) {
        self.token = Some(token.into());
        self.expires_in_ms = expires_in_ms;
    }

    /// Logout
    pub fn clear(&mut self) {
        self.token = None;
        self.expires_in_ms = None;
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }
}
