use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Console on stderr (`RUST_LOG`, default warn) plus an optional debug-level log file.
/// Keep the returned guard alive until exit so the file writer flushes.
pub fn init_tracing(log_file: Option<&Path>) -> Option<WorkerGuard> {
    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        );

    let (file_layer, guard) = match log_file.and_then(open_log_target) {
        Some((dir, name)) => {
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(writer)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
    guard
}

fn open_log_target(path: &Path) -> Option<(PathBuf, OsString)> {
    let name = path.file_name()?.to_os_string();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    // A log directory we cannot create just means no file log.
    fs::create_dir_all(&dir).ok()?;
    Some((dir, name))
}

pub fn log_error(prefix: &str, e: &dyn std::error::Error) {
    tracing::error!("{}: {}", prefix, e);
}

pub fn log_command(program: &str, args: &[OsString]) {
    let joined: Vec<_> = args.iter().map(|a| a.to_string_lossy()).collect();
    tracing::info!("RUN: {} {}", program, joined.join(" "));
}
