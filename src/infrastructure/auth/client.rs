//! Authentication backend HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::dto::{ErrorResponse, LoginResponse};
use crate::domain::entities::{Credentials, LoginToken};
use crate::domain::errors::AuthError;
use crate::domain::ports::AuthPort;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Default backend location.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";
/// Default login endpoint path.
pub const DEFAULT_LOGIN_PATH: &str = "/auth/login";
/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Interprets a successful login response body.
///
/// `null`, an empty body, or an object whose `token` is missing, `null` or
/// blank means the credentials were rejected.
///
/// # Errors
/// Returns error if the body is not JSON or `token` is not a string.
pub fn parse_login_body(body: &str) -> Result<Option<LoginToken>, AuthError> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| AuthError::malformed(format!("failed to parse response: {e}")))?;

    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Object(_) => {
            let response: LoginResponse = serde_json::from_value(value)
                .map_err(|e| AuthError::malformed(format!("unexpected token field: {e}")))?;
            Ok(response.token.and_then(LoginToken::new))
        }
        other => Err(AuthError::malformed(format!(
            "expected token object, got {other}"
        ))),
    }
}

/// Authentication backend client.
pub struct HttpAuthClient {
    client: Client,
    base_url: String,
    login_path: String,
}

impl HttpAuthClient {
    /// Creates client with default settings.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, AuthError> {
        Self::with_settings(DEFAULT_API_BASE, DEFAULT_LOGIN_PATH, DEFAULT_TIMEOUT)
    }

    /// Creates client for a specific backend.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_settings(
        base_url: impl Into<String>,
        login_path: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AuthError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            login_path: login_path.into(),
        })
    }

    /// Returns full login endpoint URL.
    #[must_use]
    pub fn login_url(&self) -> String {
        if self.login_path.starts_with('/') {
            format!("{}{}", self.base_url, self.login_path)
        } else {
            format!("{}/{}", self.base_url, self.login_path)
        }
    }

    fn map_send_error(e: &reqwest::Error) -> AuthError {
        if e.is_timeout() {
            AuthError::network("request timed out")
        } else if e.is_connect() {
            AuthError::network("failed to connect to authentication server")
        } else {
            AuthError::network(e.to_string())
        }
    }

    async fn handle_error_response(
        status: StatusCode,
        response: reqwest::Response,
    ) -> Result<Option<LoginToken>, AuthError> {
        let error_message = match response.json::<ErrorResponse>().await {
            Ok(ErrorResponse {
                message: Some(message),
            }) => message,
            _ => format!("HTTP {status}"),
        };

        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                debug!(%status, message = %error_message, "Backend rejected credentials");
                Ok(None)
            }
            StatusCode::TOO_MANY_REQUESTS => Err(AuthError::RateLimited),
            StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => Err(
                AuthError::network("authentication server is temporarily unavailable"),
            ),
            _ => Err(AuthError::server(status.as_u16(), error_message)),
        }
    }
}

#[async_trait]
impl AuthPort for HttpAuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<Option<LoginToken>, AuthError> {
        let url = self.login_url();

        debug!(url = %url, "Sending login request");

        let response = self
            .client
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach authentication server");
                Self::map_send_error(&e)
            })?;

        let status = response.status();

        if !status.is_success() {
            return Self::handle_error_response(status, response).await;
        }

        let body = response.text().await.map_err(|e| {
            warn!(error = %e, "Failed to read login response");
            AuthError::network(format!("failed to read response: {e}"))
        })?;

        parse_login_body(&body)
    }

    async fn health_check(&self) -> Result<(), AuthError> {
        debug!(url = %self.base_url, "Performing authentication server health check");

        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| Self::map_send_error(&e))?;

        if response.status().is_server_error() {
            Err(AuthError::server(
                response.status().as_u16(),
                "health check failed",
            ))
        } else {
            Ok(())
        }
    }
}
