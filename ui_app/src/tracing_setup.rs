use std::io;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Initialise tracing with a non-blocking file appender, optionally echoed
/// to stdout
///
/// The returned guard must be held for the lifetime of the program; dropping
/// it flushes and stops the background writer thread.
pub fn init(app_name: &str, log_dir: &str, default_level: Level, echo_stdout: bool) -> WorkerGuard {
    let _ = std::fs::create_dir_all(log_dir);

    let file_appender = tracing_appender::rolling::daily(log_dir, format!("{app_name}.log"));
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Respects RUST_LOG, falls back to default_level
    let env_filter = EnvFilter::builder().with_default_directive(default_level.into()).from_env_lossy();

    // File layer without ANSI colour codes
    let file_layer = fmt::layer().with_writer(non_blocking).with_target(true).with_ansi(false).compact();

    let registry = tracing_subscriber::registry().with(env_filter).with(file_layer);

    if echo_stdout {
        registry.with(fmt::layer().with_writer(io::stdout).with_ansi(true).compact()).init();
    } else {
        registry.init();
    }

    guard
}
