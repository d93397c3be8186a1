use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn default_log_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".phpscope/logs")
}

/// Initializes tracing with a daily-rolling file layer and, optionally,
/// a human-readable stderr layer. The returned guard must be held for
/// the lifetime of the process or buffered log lines are dropped.
pub fn init_logging(component: &str, log_dir: Option<&Path>, to_stderr: bool) -> WorkerGuard {
    let dir = log_dir.map(Path::to_path_buf).unwrap_or_else(default_log_dir);
    let _ = std::fs::create_dir_all(&dir);

    // Files named like resolver.log.2024-01-21
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&dir, component));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    if to_stderr {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);
        registry.with(stderr_layer).init();
    } else {
        registry.init();
    }

    guard
}
