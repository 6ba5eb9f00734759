//! Infrastructure layer with external service adapters.

/// Authentication backend client.
pub mod auth;
/// Application configuration.
pub mod config;
/// Navigation and alert adapters.
pub mod navigation;

pub use auth::HttpAuthClient;
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use navigation::{ChannelAlerts, ChannelNavigator, RouterEvent};
