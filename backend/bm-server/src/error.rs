use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] bm_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] bm_db::DbError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] bm_auth::AuthError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
