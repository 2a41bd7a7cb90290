//! Tracing setup: compact console output plus a daily-rotated log file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;

/// Log file prefix, producing files like `culinary.2026-10-18.log`
const LOG_PREFIX: &str = "culinary";

/// Initialize tracing with console and file logging.
///
/// `RUST_LOG` takes precedence over the defaults. The returned guard must be
/// kept alive for the duration of the program; file logging is skipped when
/// the directory cannot be created.
pub fn init_tracing(logs_dir: &Path, verbose: bool) -> Option<WorkerGuard> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "warn" };
        EnvFilter::new(format!(
            "{level},culinary_core={level},culinary_storage={level},culinary_cli={level}"
        ))
    });

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .compact()
        .with_line_number(false)
        .with_file(false)
        .with_target(true);

    let file = std::fs::create_dir_all(logs_dir)
        .map_err(|e| eprintln!("Warning: Failed to create logs directory: {}", e))
        .ok()
        .and_then(|_| {
            RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(LOG_PREFIX)
                .filename_suffix("log")
                .build(logs_dir)
                .map_err(|e| eprintln!("Warning: Failed to create log file appender: {}", e))
                .ok()
        })
        .map(tracing_appender::non_blocking);

    let (file_layer, guard) = match file {
        Some((writer, guard)) => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_thread_ids(true)
                .with_line_number(true)
                .with_file(true)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}
