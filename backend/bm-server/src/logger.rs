use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Install the global fern logger.
///
/// Lines go to `log_file` when set, otherwise to stdout. `colored` only
/// applies to stdout.
pub fn initialize(
    log_level: bm_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let output = match log_file.as_deref() {
        Some(path) => Dispatch::new().format(plain_line).chain(open_log_file(path)?),
        None if colored => {
            let colors = ColoredLevelConfig::new()
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);
            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, colors.color(record.level()), message, record)
                })
                .chain(std::io::stdout())
        }
        None => Dispatch::new().format(plain_line).chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match &log_file {
        Some(path) => info!("Logger initialized: level={level_filter}, file={}", path.display()),
        None => info!("Logger initialized: level={level_filter}, stdout"),
    }

    // sqlx and tower emit tracing events
    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn open_log_file(path: &Path) -> ServerErrorResult<std::fs::File> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })
}

fn plain_line(out: FormatCallback, message: &fmt::Arguments, record: &Record) {
    write_line(out, record.level(), message, record)
}

fn write_line(
    out: FormatCallback,
    level: impl fmt::Display,
    message: &fmt::Arguments,
    record: &Record,
) {
    out.finish(format_args!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        level,
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}
