//! Modal alert content.

/// Icon shown at the top of an alert.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertIcon {
    Error,
    Warning,
    Info,
    Success,
}

impl AlertIcon {
    /// Returns the glyph drawn for the icon.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Error => "✖",
            Self::Warning => "!",
            Self::Info => "i",
            Self::Success => "✔",
        }
    }
}

/// Blocking modal dialog content.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub icon: AlertIcon,
    pub title: String,
    pub text: String,
}

#[allow(missing_docs)]
impl Alert {
    pub const INVALID_CREDENTIALS_TITLE: &'static str = "Oops...";
    pub const INVALID_CREDENTIALS_TEXT: &'static str = "Email atau password salah!";

    #[must_use]
    pub fn new(icon: AlertIcon, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            text: text.into(),
        }
    }

    /// Alert shown when the backend rejects the credentials.
    #[must_use]
    pub fn invalid_credentials() -> Self {
        Self::new(
            AlertIcon::Error,
            Self::INVALID_CREDENTIALS_TITLE,
            Self::INVALID_CREDENTIALS_TEXT,
        )
    }
}
