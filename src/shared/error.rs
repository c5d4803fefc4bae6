//! Shared Error Types
//!
//! Errors produced while talking to the city registry backend.
//!
//! # Error Categories
//!
//! - Fetch failures: `Network`, `Status`, `Decode`
//! - Missing expected value: `MissingField`
//!
//! # Usage
//!
//! ```rust
//! use citydesk::shared::error::ApiError;
//!
//! let error = ApiError::status(404, "no such city");
//! assert!(error.is_fetch_failure());
//! ```
use thiserror::Error;

/// Errors returned by the API client
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure (connection refused, DNS, TLS, ...)
    #[error("Network error: {message}")]
    Network {
        /// Human-readable error message
        message: String,
    },

    /// The server answered with a non-success status
    #[error("Request failed with status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, or the status text if the body was unreadable
        body: String,
    },

    /// The body of a successful response could not be decoded
    #[error("Failed to parse response: {message}")]
    Decode {
        /// Human-readable error message
        message: String,
    },

    /// The response decoded but lacks a value the caller needs
    #[error("Response is missing expected field '{field}'")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Transport, status and decode errors all count as a failed fetch.
    pub fn is_fetch_failure(&self) -> bool {
        !matches!(self, ApiError::MissingField { .. })
    }

    /// What to put in the diagnostics log: the server's body for status
    /// errors, the error itself otherwise.
    pub fn payload(&self) -> String {
        match self {
            ApiError::Status { body, .. } if !body.is_empty() => body.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_status_error() {
        let error = ApiError::status(403, "Forbidden");
        assert_matches!(error, ApiError::Status { status: 403, ref body } if body == "Forbidden");
        assert!(error.is_fetch_failure());
    }

    #[test]
    fn test_missing_field_is_not_fetch_failure() {
        let error = ApiError::missing_field("token");
        assert!(!error.is_fetch_failure());
        assert_eq!(error.to_string(), "Response is missing expected field 'token'");
    }

    #[test]
    fn test_payload_prefers_body() {
        assert_eq!(ApiError::status(500, "Registration failed").payload(), "Registration failed");
        assert_eq!(
            ApiError::status(502, "").payload(),
            "Request failed with status 502: "
        );
        assert_eq!(
            ApiError::network("connection refused").payload(),
            "Network error: connection refused"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("{ invalid json }");
        let error: ApiError = result.unwrap_err().into();
        assert_matches!(error, ApiError::Decode { .. });
    }
}
