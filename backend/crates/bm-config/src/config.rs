use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, DatabaseConfig, LoggingConfig, RateLimitConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub rate_limit: RateLimitConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for BM_CONFIG_DIR env var, else use ./.bm/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply BM_* environment variable overrides
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

        let config_path = config_dir.join(CONFIG_FILE_NAME);

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
    /// Priority: BM_CONFIG_DIR env var > ./.bm/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.rate_limit.validate()?;

        if let Some(file) = &self.logging.file {
            if file.is_empty() || file.contains("..") || Path::new(file).is_absolute() {
                return Err(ConfigError::logging(
                    "logging.file must be a plain file name",
                ));
            }
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Get absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => {
                let dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(dir.join(file)))
            }
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (pool {})",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: HS256 secret {}, token ttl={}s, leeway={}s",
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            },
            self.auth.token_ttl_secs,
            self.auth.leeway_secs
        );
        info!(
            "  argon2: memory={}KiB, iterations={}, parallelism={}",
            self.auth.argon2_memory_kib, self.auth.argon2_iterations, self.auth.argon2_parallelism
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  rate_limit: {}/{}s",
            self.rate_limit.max_requests, self.rate_limit.window_secs
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("BM_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("BM_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("BM_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "BM_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("BM_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("BM_AUTH_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);
        Self::apply_env_parse("BM_AUTH_LEEWAY_SECS", &mut self.auth.leeway_secs);
        Self::apply_env_parse(
            "BM_AUTH_ARGON2_MEMORY_KIB",
            &mut self.auth.argon2_memory_kib,
        );
        Self::apply_env_parse(
            "BM_AUTH_ARGON2_ITERATIONS",
            &mut self.auth.argon2_iterations,
        );
        Self::apply_env_parse(
            "BM_AUTH_ARGON2_PARALLELISM",
            &mut self.auth.argon2_parallelism,
        );

        // Logging
        Self::apply_env_parse("BM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("BM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("BM_LOG_FILE", &mut self.logging.file);

        // Rate limit
        Self::apply_env_parse(
            "BM_RATE_LIMIT_MAX_REQUESTS",
            &mut self.rate_limit.max_requests,
        );
        Self::apply_env_parse(
            "BM_RATE_LIMIT_WINDOW_SECS",
            &mut self.rate_limit.window_secs,
        );
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

    /// Helper: Apply environment variable override for parseable values.
    /// Unparseable values are ignored.
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name) {
            if let Ok(parsed) = val.parse() {
                *target = parsed;
            }
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
