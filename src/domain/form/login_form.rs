//! Login form group.

use super::control::FormControl;
use super::validators::Validator;
use crate::domain::entities::{Credentials, LoginField};

/// Minimum password length accepted by the form.
pub const MIN_PASSWORD_LENGTH: usize = 5;

/// Visual state of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Touched and failing validation.
    Invalid,
    /// Passing validation.
    Valid,
    /// Neither; no styling.
    Untouched,
}

impl FieldStatus {
    /// Returns the style tag for the status.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Invalid => "is-invalid",
            Self::Valid => "is-valid",
            Self::Untouched => "",
        }
    }
}

/// Email and password controls with their rules.
#[derive(Debug, Clone)]
pub struct LoginForm {
    email: FormControl,
    password: FormControl,
}

impl LoginForm {
    /// Builds an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::with_email("")
    }

    /// Builds a form with the email prefilled.
    #[must_use]
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: FormControl::new(email, [Validator::Required, Validator::Email]),
            password: FormControl::new(
                "",
                [Validator::Required, Validator::MinLength(MIN_PASSWORD_LENGTH)],
            ),
        }
    }

    /// Returns the control for a field.
    #[must_use]
    pub const fn get(&self, field: LoginField) -> &FormControl {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    /// Returns the control for a field, mutably.
    pub fn get_mut(&mut self, field: LoginField) -> &mut FormControl {
        match field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    /// Returns current field values as a login payload.
    #[must_use]
    pub fn value(&self) -> Credentials {
        Credentials::new(self.email.value(), self.password.value())
    }

    /// Returns whether every control is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        LoginField::ALL.iter().all(|f| self.get(*f).is_valid())
    }

    /// Marks every control touched so errors become visible.
    pub fn mark_all_as_touched(&mut self) {
        for field in LoginField::ALL {
            self.get_mut(field).mark_as_touched();
        }
    }

    /// Returns the visual state of a field.
    #[must_use]
    pub fn field_status(&self, field: LoginField) -> FieldStatus {
        let control = self.get(field);
        if control.touched() && control.is_invalid() {
            FieldStatus::Invalid
        } else if control.is_valid() {
            FieldStatus::Valid
        } else {
            FieldStatus::Untouched
        }
    }

    /// Clears both controls.
    pub fn reset(&mut self) {
        self.email.reset();
        self.password.reset();
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn filled(email: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::new();
        form.get_mut(LoginField::Email).set_value(email);
        form.get_mut(LoginField::Password).set_value(password);
        form
    }

    #[test]
    fn test_untouched_invalid_field_has_no_style() {
        let form = LoginForm::new();

        assert_eq!(form.field_status(LoginField::Email), FieldStatus::Untouched);
        assert_eq!(form.field_status(LoginField::Email).css_class(), "");
    }

    #[test_case("", LoginField::Email ; "empty_email")]
    #[test_case("not-an-email", LoginField::Email ; "malformed_email")]
    #[test_case("", LoginField::Password ; "empty_password")]
    #[test_case("1234", LoginField::Password ; "short_password")]
    fn test_touched_invalid_field_reports_invalid(value: &str, field: LoginField) {
        let mut form = LoginForm::new();
        form.get_mut(field).set_value(value);
        form.get_mut(field).mark_as_touched();

        assert_eq!(form.field_status(field), FieldStatus::Invalid);
        assert_eq!(form.field_status(field).css_class(), "is-invalid");
    }

    #[test]
    fn test_valid_field_styled_before_touch() {
        let form = filled("budi@example.com", "12345");

        assert_eq!(form.field_status(LoginField::Email), FieldStatus::Valid);
        assert_eq!(form.field_status(LoginField::Password).css_class(), "is-valid");
        assert!(form.is_valid());
    }

    #[test]
    fn test_value_reflects_current_fields() {
        let form = filled("budi@example.com", "rahasia");

        assert_eq!(form.value(), Credentials::new("budi@example.com", "rahasia"));
    }

    #[test]
    fn test_mark_all_as_touched() {
        let mut form = LoginForm::new();
        form.mark_all_as_touched();

        for field in LoginField::ALL {
            assert_eq!(form.field_status(field), FieldStatus::Invalid);
        }
    }

    #[test]
    fn test_prefilled_email() {
        let form = LoginForm::with_email("budi@example.com");

        assert!(form.get(LoginField::Email).is_valid());
        assert!(!form.is_valid());
    }
}
