//! Domain error types.

mod auth_error;
mod navigation_error;

pub use auth_error::AuthError;
pub use navigation_error::NavigationError;
