mod backend_config;
mod config;
mod error;
mod identity_config;
mod log_level;
mod logging_config;
mod retry_config;

#[cfg(test)]
mod tests;

pub use backend_config::BackendConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use identity_config::IdentityConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use retry_config::RetryConfig;

const CONFIG_DIR_ENV: &str = "ACADEMY_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".academy";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:4943";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

const DEFAULT_IDENTITY_FILENAME: &str = "identity.json";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
