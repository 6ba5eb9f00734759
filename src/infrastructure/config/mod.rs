mod app_config;
mod args;
mod storage;

pub use app_config::{ApiConfig, AppConfig, DEFAULT_START_URL, LogLevel};
pub use args::CliArgs;
pub use storage::{ConfigError, StorageManager};
