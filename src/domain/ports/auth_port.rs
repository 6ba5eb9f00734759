//! Authentication port definition.

use async_trait::async_trait;

use crate::domain::entities::{Credentials, LoginToken};
use crate::domain::errors::AuthError;

/// Port for backend authentication operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Submits credentials.
    ///
    /// Returns `Ok(None)` when the backend rejects them.
    async fn login(&self, credentials: &Credentials) -> Result<Option<LoginToken>, AuthError>;

    /// Checks backend availability.
    async fn health_check(&self) -> Result<(), AuthError>;
}
