use bm_server::error::{Result as ServerErrorResult, ServerError};
use bm_server::{AppState, AuthSettings, build_router, logger};

use bm_auth::{PasswordHasher, RateLimitConfig};
use bm_config::{Config, ConfigError};

use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

/// How often idle rate-limit entries are dropped
const RATE_LIMIT_PRUNE_INTERVAL: Duration = Duration::from_secs(300);

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // .env is optional (development)
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(parent).map_err(|e| ServerError::Io {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting bm-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool (runs migrations)
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = bm_db::open_pool(&database_path, config.database.max_connections).await?;
    info!("Database ready");

    let jwt_secret = config
        .auth
        .jwt_secret
        .clone()
        .ok_or_else(|| ConfigError::auth("auth.jwt_secret is required"))?;

    let hasher = PasswordHasher::with_params(
        config.auth.argon2_memory_kib,
        config.auth.argon2_iterations,
        config.auth.argon2_parallelism,
    )?;

    let app_state = AppState::new(
        pool,
        AuthSettings {
            jwt_secret: jwt_secret.into_bytes(),
            token_ttl: config.auth.token_ttl(),
            leeway_secs: config.auth.leeway_secs,
            hasher,
            rate_limit: RateLimitConfig {
                max_requests: config.rate_limit.max_requests,
                window_secs: config.rate_limit.window_secs,
            },
        },
    )?;

    // Periodically forget rate-limit keys that have fully recovered
    let rate_limiter = app_state.rate_limiter.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(RATE_LIMIT_PRUNE_INTERVAL);
        loop {
            interval.tick().await;
            rate_limiter.prune();
        }
    });

    let pool_for_shutdown = app_state.pool.clone();
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let io_error = |source| ServerError::Io {
        path: bind_addr.clone(),
        source,
    };
    let listener = TcpListener::bind(&bind_addr).await.map_err(io_error)?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr().map_err(io_error)?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(io_error)?;

    pool_for_shutdown.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

/// Resolves on Ctrl+C or, on unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown");
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
