//! Structured logging.
//!
//! Console output plus two JSON file sinks split by level: `app/` receives
//! every event except errors, `err/` receives only errors. Files rotate daily.

use std::path::Path;

use thiserror::Error;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{
    filter::filter_fn, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::config::ObservabilityConfig;

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to create log directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to open log file: {0}")]
    Appender(#[from] InitError),

    #[error("failed to install subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Keeps the non-blocking file writers flushing. Drop on shutdown.
#[must_use]
pub struct LoggingGuards {
    _guards: Vec<WorkerGuard>,
}

/// Whether an event at `level` belongs in the general application log.
pub fn routes_to_app_sink(level: &Level) -> bool {
    *level != Level::ERROR
}

/// Whether an event at `level` belongs in the error log.
pub fn routes_to_error_sink(level: &Level) -> bool {
    *level == Level::ERROR
}

/// Filter directives used when `RUST_LOG` is not set.
pub fn default_directives(log_level: &str) -> String {
    format!("{},tower_http=warn,hyper=warn", log_level)
}

/// Initialize the global subscriber.
pub fn init_logging(config: &ObservabilityConfig) -> Result<LoggingGuards, LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.log_level)));

    let console = fmt::layer().with_target(true);

    let mut guards = Vec::new();
    let (app_layer, err_layer) = match &config.log_dir {
        Some(dir) => {
            let app = daily_appender(&dir.join("app"), "log", config.retained_files)?;
            let (app_writer, app_guard) = tracing_appender::non_blocking(app);
            let err = daily_appender(&dir.join("err"), "error", config.retained_files)?;
            let (err_writer, err_guard) = tracing_appender::non_blocking(err);
            guards.push(app_guard);
            guards.push(err_guard);

            let app_layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(app_writer)
                .with_filter(filter_fn(|meta| routes_to_app_sink(meta.level())));
            let err_layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(err_writer)
                .with_filter(filter_fn(|meta| routes_to_error_sink(meta.level())));
            (Some(app_layer), Some(err_layer))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(app_layer)
        .with(err_layer)
        .try_init()?;

    if let Some(dir) = &config.log_dir {
        tracing::info!(
            log_dir = %dir.display(),
            retained_files = config.retained_files,
            "File logging enabled"
        );
    }

    Ok(LoggingGuards { _guards: guards })
}

fn daily_appender(
    dir: &Path,
    prefix: &str,
    max_files: usize,
) -> Result<RollingFileAppender, LoggingError> {
    std::fs::create_dir_all(dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .filename_suffix("json")
        .max_log_files(max_files)
        .build(dir)?;
    Ok(appender)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sinks_partition_levels() {
        for level in [Level::TRACE, Level::DEBUG, Level::INFO, Level::WARN, Level::ERROR] {
            assert_ne!(routes_to_app_sink(&level), routes_to_error_sink(&level));
        }
        assert!(routes_to_error_sink(&Level::ERROR));
        assert!(routes_to_app_sink(&Level::WARN));
    }

    #[test]
    fn test_default_directives_quiet_framework_noise() {
        let directives = default_directives("debug");
        assert!(directives.starts_with("debug,"));
        assert!(directives.contains("tower_http=warn"));
        assert!(EnvFilter::try_new(&directives).is_ok());
    }

    #[test]
    fn test_daily_appender_creates_directory() {
        let dir = std::env::temp_dir()
            .join(format!("calculator-logs-{}", uuid::Uuid::new_v4()))
            .join("err");
        let appender = daily_appender(&dir, "error", 3);
        assert!(appender.is_ok());
        assert!(dir.is_dir());
        let _ = std::fs::remove_dir_all(dir.parent().unwrap());
    }
}
