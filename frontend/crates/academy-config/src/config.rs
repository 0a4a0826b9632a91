use crate::{
    BackendConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, IdentityConfig, LoggingConfig, RetryConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub identity: IdentityConfig,
    pub logging: LoggingConfig,
    pub retry: RetryConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for ACADEMY_CONFIG_DIR env var, else use ./.academy/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply ACADEMY_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: ACADEMY_CONFIG_DIR env var > ./.academy/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all sections. Call after load().
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.backend.validate()?;
        self.identity.validate()?;
        self.retry.validate()?;

        Ok(())
    }

    /// Absolute path of the identity file
    pub fn identity_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.identity.file))
    }

    /// Absolute path of the log file, if file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  backend: {} (timeout {}s)",
            self.backend.url, self.backend.timeout_secs
        );
        info!("  identity: {}", self.identity.file);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("-")
        );
        info!(
            "  retry: attempts={}, initial={}ms, max={}s, backoff={}x",
            self.retry.max_attempts,
            self.retry.initial_delay_ms,
            self.retry.max_delay_secs,
            self.retry.backoff_multiplier
        );
    }

    fn apply_env_overrides(&mut self) {
        // Backend
        Self::apply_env_string("ACADEMY_BACKEND_URL", &mut self.backend.url);
        Self::apply_env_parse(
            "ACADEMY_BACKEND_TIMEOUT_SECS",
            &mut self.backend.timeout_secs,
        );

        // Identity
        Self::apply_env_string("ACADEMY_IDENTITY_FILE", &mut self.identity.file);

        // Logging
        Self::apply_env_parse("ACADEMY_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("ACADEMY_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("ACADEMY_LOG_FILE", &mut self.logging.file);

        // Retry
        Self::apply_env_parse("ACADEMY_RETRY_MAX_ATTEMPTS", &mut self.retry.max_attempts);
        Self::apply_env_parse(
            "ACADEMY_RETRY_INITIAL_DELAY_MS",
            &mut self.retry.initial_delay_ms,
        );
        Self::apply_env_parse(
            "ACADEMY_RETRY_MAX_DELAY_SECS",
            &mut self.retry.max_delay_secs,
        );
        Self::apply_env_parse(
            "ACADEMY_RETRY_BACKOFF_MULTIPLIER",
            &mut self.retry.backoff_multiplier,
        );
        Self::apply_env_bool("ACADEMY_RETRY_JITTER", &mut self.retry.jitter);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
