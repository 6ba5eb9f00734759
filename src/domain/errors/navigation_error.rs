//! Navigation error types.

use thiserror::Error;

/// Navigation failure variants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum NavigationError {
    #[error("refusing to navigate outside the application: {0}")]
    External(String),

    #[error("router is no longer running")]
    Closed,
}
