//! Domain layer with entities, the form model and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Form controls and validators.
pub mod form;
/// Port definitions.
pub mod ports;

pub use entities::{ActivatedRoute, Alert, AlertIcon, Credentials, LoginField, LoginToken};
pub use errors::{AuthError, NavigationError};
pub use form::{FieldStatus, LoginForm};
pub use ports::{AlertPort, AuthPort, NavigatorPort};
