mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;

pub const CONFIG_DIR_ENV: &str = "BM_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR_NAME: &str = ".bm";
pub const CONFIG_FILE_NAME: &str = "config.toml";

// Server
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3333;
const MIN_PORT: u16 = 1024;

// Database
const DEFAULT_DATABASE_FILENAME: &str = "bookmarks.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

// Auth
const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_TOKEN_TTL_SECS: u64 = 15 * 60;
const MIN_TOKEN_TTL_SECS: u64 = 60;
const MAX_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;
const DEFAULT_LEEWAY_SECS: u64 = 0;
const MAX_LEEWAY_SECS: u64 = 300;
const DEFAULT_ARGON2_MEMORY_KIB: u32 = 19 * 1024;
const MIN_ARGON2_MEMORY_KIB: u32 = 8 * 1024;
const MAX_ARGON2_MEMORY_KIB: u32 = 1024 * 1024;
const DEFAULT_ARGON2_ITERATIONS: u32 = 2;
const MAX_ARGON2_ITERATIONS: u32 = 10;
const DEFAULT_ARGON2_PARALLELISM: u32 = 1;
const MAX_ARGON2_PARALLELISM: u32 = 16;

// Logging
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
