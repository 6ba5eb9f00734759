//! Reactive form model.

mod control;
mod login_form;
mod validators;

pub use control::FormControl;
pub use login_form::{FieldStatus, LoginForm, MIN_PASSWORD_LENGTH};
pub use validators::{ValidationError, Validator, is_plausible_email};
