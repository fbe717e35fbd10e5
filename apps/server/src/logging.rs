//! Logging initialization.
//!
//! Sets up `tracing` based on [`LoggingConfig`]: an environment filter
//! (config level, overridable via `RUST_LOG`), human-readable or JSON
//! console output, and optionally a daily-rotated log file.

use std::fs;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Keeps the non-blocking file writer alive; hold it for the whole
/// process lifetime or buffered log lines are lost on shutdown.
pub struct LogGuard {
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<LogGuard> {
    let env_filter = build_env_filter(config);
    let registry = tracing_subscriber::registry().with(env_filter);

    let file_writer = match &config.directory {
        Some(directory) => {
            fs::create_dir_all(directory)?;
            let appender = tracing_appender::rolling::daily(directory, "shaker.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            Some((writer, guard))
        }
        None => None,
    };

    let file_guard = match (config.json, file_writer) {
        (true, Some((writer, guard))) => {
            registry
                .with(fmt::layer().json())
                .with(fmt::layer().json().with_writer(writer).with_ansi(false))
                .init();
            Some(guard)
        }
        (true, None) => {
            registry.with(fmt::layer().json()).init();
            None
        }
        (false, Some((writer, guard))) => {
            registry
                .with(fmt::layer())
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .init();
            Some(guard)
        }
        (false, None) => {
            registry.with(fmt::layer()).init();
            None
        }
    };

    tracing::info!(
        level = %config.level,
        json = config.json,
        file_logging = config.directory.is_some(),
        "Logging initialized"
    );

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

/// `RUST_LOG` wins over the configured level when set.
fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}
