//! Global logging for the stoc compiler
//!
//! A trimmed-down global logging layer: one process-wide `LoggingService`
//! behind a `OnceLock`, macro entry points with key/value context pairs, and
//! a no-op path when the global service was never initialized (library
//! consumers who do not care about logs pay nothing).

pub mod codes;
pub mod events;
pub mod macros;
pub mod service;

use std::env;
use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger};

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

/// Initialize global logging with a stderr sink.
///
/// The minimum level defaults to `Info` and can be overridden with the
/// `STOC_LOG_LEVEL` environment variable (`error`, `warn`, `info`, `debug`).
/// Fails if the global service was already initialized.
pub fn init_global_logging() -> Result<(), String> {
    let service = Arc::new(LoggingService::new(
        Box::new(ConsoleLogger),
        level_from_env(),
    ));
    init_global_logging_with_service(service)
}

/// Initialize with a custom service (primarily for testing).
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

/// True once a global service has been installed
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

fn level_from_env() -> LogLevel {
    match env::var("STOC_LOG_LEVEL").ok().as_deref() {
        Some("error") => LogLevel::Error,
        Some("warn") => LogLevel::Warning,
        Some("debug") => LogLevel::Debug,
        _ => LogLevel::Info,
    }
}

fn dispatch(event: LogEvent) {
    if let Some(service) = GLOBAL_LOGGER.get() {
        service.log_event(event);
    }
}

fn with_context(mut event: LogEvent, context: Vec<(&str, String)>) -> LogEvent {
    for (key, value) in context {
        event = event.with_context(key, value);
    }
    event
}

// Macro support points. Each accepts pre-rendered context values so the
// macros can take any Display type on the right of `=>`.

pub fn log_error_with_context(code: Code, message: &str, context: Vec<(&str, String)>) {
    dispatch(with_context(LogEvent::error(code, message), context));
}

pub fn log_warning_with_context(message: &str, context: Vec<(&str, String)>) {
    dispatch(with_context(LogEvent::warning(message), context));
}

pub fn log_info_with_context(message: &str, context: Vec<(&str, String)>) {
    dispatch(with_context(LogEvent::info(message), context));
}

pub fn log_debug_with_context(message: &str, context: Vec<(&str, String)>) {
    dispatch(with_context(LogEvent::debug(message), context));
}

pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, String)>) {
    dispatch(with_context(LogEvent::success(code, message), context));
}
