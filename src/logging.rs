//! Logging setup
//!
//! The dashboard owns the terminal, so log lines go to a file instead of
//! stdout. `RUST_LOG` wins over the configured level.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber writing to `file`
///
/// The returned guard flushes pending lines on drop and must be kept alive
/// for the life of the program.
pub fn init_file_logging(file: &Path, default_level: &str) -> std::io::Result<WorkerGuard> {
    let directory = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&directory)?;

    let file_name = file
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "rtp-monitor.log".into());

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    Ok(guard)
}
