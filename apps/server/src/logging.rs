//! Logging initialization for the server binary
//!
//! Supports configuration-based logging with file rotation, JSON formatting,
//! and `RUST_LOG` overrides.

use std::fs;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Keeps the non-blocking file writer flushing. Hold it for the program
/// duration.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize logging from `LoggingConfig`
///
/// - JSON or human-readable console output
/// - Optional file output with rotation (daily, hourly, minutely, never)
/// - `RUST_LOG` overrides the configured level
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<LoggingGuard> {
    let subscriber = tracing_subscriber::registry().with(build_env_filter(config));

    let file_guard = if config.json {
        let console_layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_writer(std::io::stdout);

        if config.file_enabled {
            let (file_writer, guard) = create_file_appender(config)?;
            let file_layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .with_writer(file_writer);
            subscriber.with(console_layer).with(file_layer).try_init()?;
            Some(guard)
        } else {
            subscriber.with(console_layer).try_init()?;
            None
        }
    } else {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_writer(std::io::stdout);

        if config.file_enabled {
            let (file_writer, guard) = create_file_appender(config)?;
            let file_layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(file_writer);
            subscriber.with(console_layer).with(file_layer).try_init()?;
            Some(guard)
        } else {
            subscriber.with(console_layer).try_init()?;
            None
        }
    };

    tracing::info!(
        level = %config.level,
        json = config.json,
        file_enabled = config.file_enabled,
        "Logging initialized"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "fhir_server={level},meridian_server={level},meridian_models={level},tower_http=debug",
            level = config.level
        ))
    })
}

fn create_file_appender(config: &LoggingConfig) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(&config.file_directory)?;

    let directory = &config.file_directory;
    let prefix = &config.file_prefix;
    let file_appender = match config.file_rotation.as_str() {
        "hourly" => tracing_appender::rolling::hourly(directory, prefix),
        "minutely" => tracing_appender::rolling::minutely(directory, prefix),
        "never" => tracing_appender::rolling::never(directory, format!("{prefix}.log")),
        _ => tracing_appender::rolling::daily(directory, prefix),
    };

    Ok(tracing_appender::non_blocking(file_appender))
}

/// Initialize logging from `RUST_LOG` only.
///
/// For tests and tools that do not load a `Config`. Safe to call more than
/// once; later calls are no-ops.
pub fn init_simple_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "meridian_server=info,meridian_models=info".into()),
        )
        .with(fmt::layer())
        .try_init();
}
