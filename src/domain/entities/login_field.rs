//! Login form field identifiers.

use std::fmt;

/// One of the named input slots of the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginField {
    /// Email address.
    Email,
    /// Account password.
    Password,
}

impl LoginField {
    /// Fields in form order.
    pub const ALL: [Self; 2] = [Self::Email, Self::Password];

    /// Returns the form control key.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    /// Returns the label shown above the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }

    /// Returns the field after this one, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::Email,
        }
    }

    /// Returns the field before this one, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        // Two fields, so previous and next coincide.
        self.next()
    }
}

impl fmt::Display for LoginField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
