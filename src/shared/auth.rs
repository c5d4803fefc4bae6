//! Registration wire types for `POST /api/users/register`.

use serde::{Deserialize, Serialize};

/// Credentials posted to the registration endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Body returned by the backend after a successful signup.
///
/// The token is optional on purpose: a 2xx response without a usable token
/// is a distinct failure the registration flow has to detect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationSucceeded {
    #[serde(default)]
    pub token: Option<String>,
    /// Token lifetime in milliseconds.
    #[serde(default)]
    pub expires_in: Option<i64>,
}

impl AuthenticationSucceeded {
    /// The issued token, if present and non-empty.
    pub fn usable_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}
