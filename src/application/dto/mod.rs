//! Data transfer objects for the application layer.

mod login_outcome;

pub use login_outcome::LoginOutcome;
