//! Domain entities.

mod alert;
mod credentials;
mod login_field;
mod login_token;
mod route;

pub use alert::{Alert, AlertIcon};
pub use credentials::Credentials;
pub use login_field::LoginField;
pub use login_token::LoginToken;
pub use route::ActivatedRoute;
