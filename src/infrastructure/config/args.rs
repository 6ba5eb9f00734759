use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "masuk",
    version,
    about = "A lightweight terminal login client",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Authentication backend base URL.
    #[arg(long, env = "MASUK_API_BASE_URL", value_name = "URL")]
    pub api_base_url: Option<String>,

    /// Login endpoint path.
    #[arg(long, value_name = "PATH")]
    pub login_path: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub request_timeout_secs: Option<u64>,

    /// Page location to start at, e.g. `/login?next=/dashboard`.
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Email to prefill.
    #[arg(short, long, env = "MASUK_EMAIL")]
    pub email: Option<String>,
}
