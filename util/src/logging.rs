use std::fs;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const FALLBACK_FILTER: &str = "info";

/// `log_level` as an env filter, or the fallback filter and the parse error.
fn env_filter(log_level: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(log_level) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(FALLBACK_FILTER), Some(err)),
    }
}

/// Installs the global `tracing` subscriber.
///
/// Events always go to stdout. When `log_file` is set they are also written,
/// without ANSI colors, to a daily-rolling file under `logs/`. Keep the returned
/// guard alive until exit so buffered file output is flushed.
pub fn init_logging(log_level: &str, log_file: Option<&str>) -> Option<WorkerGuard> {
    let (env_filter, rejected) = env_filter(log_level);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true);

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer);

    let guard = match log_file {
        Some(file) => {
            fs::create_dir_all("logs").ok();

            let file_appender = rolling::daily("logs", file);
            let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_target(true);

            registry.with(file_layer).init();
            Some(guard)
        }
        None => {
            registry.init();
            None
        }
    };

    if let Some(err) = rejected {
        tracing::warn!(
            log_level,
            error = %err,
            "Invalid LOG_LEVEL, falling back to {FALLBACK_FILTER}"
        );
    }
    guard
}
