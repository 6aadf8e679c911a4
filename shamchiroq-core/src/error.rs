//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// network error (connection refused, DNS failure, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a non-success status
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The session token was rejected (HTTP 401/403)
    #[error("Unauthorized: session token rejected")]
    Unauthorized,

    /// serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Sign-out failed
    #[error("Session error: {0}")]
    Session(String),

    /// Storage layer error (token store, config file)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Static configuration is invalid (duplicate route, zero page size, bad URL)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A route was selected that the registry does not contain
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, signed-out session, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Unauthorized | Self::UnknownRoute(_) => true,
            Self::Api { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::Serialization(err.to_string());
        }
        match err.status() {
            Some(status) if status.as_u16() == 401 || status.as_u16() == 403 => Self::Unauthorized,
            Some(status) => Self::Api {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => Self::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_are_expected() {
        assert!(CoreError::Unauthorized.is_expected());
        assert!(CoreError::Api {
            status: 404,
            message: "missing".to_string()
        }
        .is_expected());
        assert!(!CoreError::Api {
            status: 502,
            message: "bad gateway".to_string()
        }
        .is_expected());
        assert!(!CoreError::Network("refused".to_string()).is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(CoreError::UnknownRoute("/x".to_string())).unwrap();
        assert_eq!(json["code"], "UnknownRoute");
        assert_eq!(json["details"], "/x");
    }
}
