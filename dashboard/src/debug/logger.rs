//! File-based logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{DebugConfig, LOG_FILE_PREFIX};

/// Initialize the logging system
///
/// Sets up file-based logging with:
/// - Daily log rotation
/// - Non-blocking writes so the command loop never waits on disk
/// - Panic hook integration for crash logging
///
/// Returns the writer guard; dropping it flushes and stops the log writer.
/// Returns `None` (logging disabled) when the log directory cannot be created.
pub fn init() -> Option<WorkerGuard> {
    let config = DebugConfig::from_env();

    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("dashboard=info,warn"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI codes in log files

    if let Err(e) = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
    {
        eprintln!("Warning: Logging already initialized: {}", e);
        return None;
    }

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        debug = config.is_debug_enabled(),
        "Logging initialized"
    );

    setup_panic_hook();
    Some(guard)
}

/// Set up panic hook to log panics with location and message
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        let backtrace = std::backtrace::Backtrace::force_capture();
        tracing::error!(
            location = %location,
            message = %message,
            "!!!!! APPLICATION PANIC !!!!!"
        );
        tracing::error!(backtrace = %backtrace, "Panic backtrace");

        default_panic(panic_info);
    }));
}
