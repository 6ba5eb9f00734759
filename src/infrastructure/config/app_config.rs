//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::args::CliArgs;
use crate::infrastructure::auth::{DEFAULT_API_BASE, DEFAULT_LOGIN_PATH};

pub(super) const APP_NAME: &str = "masuk";
pub(super) const APP_QUALIFIER: &str = "com";
pub(super) const APP_ORGANIZATION: &str = "linuxmobile";

/// Location the login screen starts at when none is given.
pub const DEFAULT_START_URL: &str = "/login";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Authentication backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Backend base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Login endpoint path, relative to the base URL.
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ApiConfig {
    /// Returns the request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            login_path: default_login_path(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_login_path() -> String {
    DEFAULT_LOGIN_PATH.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

/// Application configuration, file values overridden by CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Page location the login screen was opened at.
    #[serde(skip)]
    pub start_url: Option<String>,

    /// Email to prefill.
    #[serde(skip)]
    pub email: Option<String>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Backend configuration.
    #[serde(default)]
    pub api: ApiConfig,
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(base_url) = args.api_base_url {
            self.api.base_url = base_url;
        }
        if let Some(login_path) = args.login_path {
            self.api.login_path = login_path;
        }
        if let Some(timeout) = args.request_timeout_secs {
            self.api.request_timeout_secs = timeout;
        }
        if let Some(url) = args.url {
            self.start_url = Some(url);
        }
        if let Some(email) = args.email {
            self.email = Some(email);
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("masuk.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }

    /// Returns effective start location.
    #[must_use]
    pub fn effective_start_url(&self) -> &str {
        self.start_url.as_deref().unwrap_or(DEFAULT_START_URL)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            start_url: None,
            email: None,
            log_level: LogLevel::Info,
            api: ApiConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config_file() {
        let toml_content = r#"
            log_level = "debug"

            [api]
            base_url = "https://auth.example.co.id/api"
            request_timeout_secs = 10
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.api.base_url, "https://auth.example.co.id/api");
        assert_eq!(config.api.login_path, DEFAULT_LOGIN_PATH);
        assert_eq!(config.api.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.api.base_url, DEFAULT_API_BASE);
        assert_eq!(config.effective_start_url(), "/login");
        assert!(config.email.is_none());
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "masuk",
            "--api-base-url",
            "https://staging.example.com",
            "--url",
            "/login?next=/dashboard",
            "--log-level",
            "trace",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.api.base_url, "https://staging.example.com");
        assert_eq!(config.effective_start_url(), "/login?next=/dashboard");
        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.api.login_path, DEFAULT_LOGIN_PATH);
    }
}
