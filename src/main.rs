//! User-Grid - Main Entry Point
//!
//! Searchable, sortable, paginated user table for the desktop

use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt};
use user_grid::app::application::run_app;
use user_grid::helpers::{get_or_create_data_dir, is_development};

const LOG_FILE_PREFIX: &str = "user-grid.log";

/// Install stderr and daily-rolling file logging.
///
/// The returned guard flushes the file writer and must live until exit.
fn init_logging() -> Option<WorkerGuard> {
    let default_level = if is_development() { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into());

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(filter.clone());

    let file_writer = get_or_create_data_dir()
        .map_err(|e| e.to_string())
        .and_then(|dir| {
            rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(LOG_FILE_PREFIX)
                .build(dir)
                .map_err(|e| e.to_string())
        });

    let (file_layer, guard, file_error) = match file_writer {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_timer(fmt::time::LocalTime::rfc_3339())
                .with_writer(writer)
                .with_filter(filter);
            (Some(layer), Some(guard), None)
        }
        Err(e) => (None, None, Some(e)),
    };

    let subscriber = Registry::default().with(stderr_layer).with(file_layer);
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {e}");
    }
    if let Some(e) = file_error {
        tracing::warn!(error = %e, "File logging disabled");
    }

    guard
}

fn main() {
    let _guard = init_logging();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting User-Grid...");

    run_app();
}
