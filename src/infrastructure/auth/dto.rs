use serde::Deserialize;

/// Error body returned by the authentication backend.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Error message from the backend.
    #[serde(default)]
    pub message: Option<String>,
}

/// Successful login body. A missing or `null` token means rejection.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}
