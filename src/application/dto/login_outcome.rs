//! Login outcome DTO.

use crate::domain::entities::LoginToken;

/// Terminal result of one login submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Backend issued a token and the app navigated to `url`.
    Redirected {
        /// Requested navigation target, possibly empty.
        url: String,
        /// Issued token.
        token: LoginToken,
    },
    /// Backend rejected the credentials.
    Rejected,
    /// Transport or unexpected failure.
    Failed {
        /// Error description.
        message: String,
    },
}

impl LoginOutcome {
    /// Returns whether login succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Redirected { .. })
    }
}
