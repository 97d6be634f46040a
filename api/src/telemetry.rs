//! Tracing subscriber setup from `LoggingConfig`

use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use wl_shared::config::{FileLoggingConfig, LogFormat, LoggingConfig};

/// Keeps the background log-file writer alive
///
/// Dropping it flushes pending lines and closes the file, so hold it until
/// the server stops.
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber
///
/// `RUST_LOG` overrides the configured filter. When a log file is configured,
/// JSON lines are appended to it from a background thread in addition to
/// stdout.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<LoggingGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));

    let (file_layer, guard) = match &config.file {
        Some(file) => {
            let (writer, guard) = file_writer(file)?;
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_file(config.source_location)
                    .with_line_number(config.source_location),
            )
            .try_init()?,
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_ansi(config.colored)
                    .with_file(config.source_location)
                    .with_line_number(config.source_location),
            )
            .try_init()?,
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_ansi(config.colored))
            .try_init()?,
    }

    Ok(LoggingGuard { _file: guard })
}

/// Non-blocking appender for the configured log file
fn file_writer(config: &FileLoggingConfig) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    let file_name = config
        .path
        .file_name()
        .with_context(|| format!("log file path {} has no file name", config.path.display()))?;
    let dir = match config.path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("wl-api-logs-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_file_writer_appends_after_guard_drop() {
        let dir = scratch_dir();
        let config = FileLoggingConfig {
            path: dir.join("nested").join("messenger.log"),
        };

        let (mut writer, guard) = file_writer(&config).unwrap();
        writer.write_all(b"{\"event\":\"message_delivered\"}\n").unwrap();
        drop(guard);

        let contents = std::fs::read_to_string(&config.path).unwrap();
        assert!(contents.contains("message_delivered"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_file_writer_rejects_path_without_file_name() {
        let config = FileLoggingConfig {
            path: PathBuf::from("/"),
        };

        assert!(file_writer(&config).is_err());
    }
}
