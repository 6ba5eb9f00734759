//! Authentication error types.

use thiserror::Error;

/// Failures talking to the authentication backend.
///
/// A rejected login is not an error: the port reports it as a missing token.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum AuthError {
    #[error("network error during authentication: {message}")]
    NetworkError { message: String },

    #[error("authentication server error: {status}")]
    ServerError { status: u16, message: String },

    #[error("rate limited by authentication server")]
    RateLimited,

    #[error("malformed authentication response: {message}")]
    MalformedResponse { message: String },

    #[error("unexpected authentication error: {message}")]
    Unexpected { message: String },
}

impl AuthError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError {
            message: message.into(),
        }
    }

    /// Creates server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::ServerError {
            status,
            message: message.into(),
        }
    }

    /// Creates malformed response error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::RateLimited)
    }
}
