//! Logging sinks and the level-filtering service wrapper

use super::events::{LogEvent, LogLevel};
use std::fmt::Write as _;
use std::sync::Mutex;

/// A sink for log events.
pub trait Logger: Send + Sync {
    fn log(&self, event: &LogEvent);
}

/// Logs formatted events to stderr.
#[derive(Debug, Default)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    fn format(event: &LogEvent) -> String {
        let mut line = String::new();
        match event.code {
            Some(code) => {
                let _ = write!(line, "[{} {}] {}", event.level.as_str(), code, event.message);
            }
            None => {
                let _ = write!(line, "[{}] {}", event.level.as_str(), event.message);
            }
        }
        for (key, value) in &event.context {
            let _ = write!(line, " {key}={value}");
        }
        line
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, event: &LogEvent) {
        eprintln!("{}", Self::format(event));
    }
}

/// Captures events in memory; the test sink.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    events: Mutex<Vec<LogEvent>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured events
    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().expect("memory logger poisoned").clone()
    }

    pub fn clear(&self) {
        self.events.lock().expect("memory logger poisoned").clear();
    }
}

impl Logger for MemoryLogger {
    fn log(&self, event: &LogEvent) {
        self.events
            .lock()
            .expect("memory logger poisoned")
            .push(event.clone());
    }
}

/// A logger plus a minimum severity gate.
pub struct LoggingService {
    logger: Box<dyn Logger>,
    min_level: LogLevel,
}

impl LoggingService {
    pub fn new(logger: Box<dyn Logger>, min_level: LogLevel) -> Self {
        Self { logger, min_level }
    }

    /// Forward `event` to the sink unless it is below the minimum level.
    pub fn log_event(&self, event: LogEvent) {
        if event.level <= self.min_level {
            self.logger.log(&event);
        }
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct SharedMemory(Arc<MemoryLogger>);

    impl Logger for SharedMemory {
        fn log(&self, event: &LogEvent) {
            self.0.log(event);
        }
    }

    #[test]
    fn service_filters_below_minimum_level() {
        let memory = Arc::new(MemoryLogger::new());
        let service = LoggingService::new(Box::new(SharedMemory(memory.clone())), LogLevel::Info);

        service.log_event(LogEvent::debug("dropped"));
        service.log_event(LogEvent::info("kept"));
        service.log_event(LogEvent::warning("kept too"));

        let events = memory.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].message, "kept");
        assert_eq!(events[1].message, "kept too");
    }

    #[test]
    fn memory_logger_snapshots_and_clears() {
        let memory = MemoryLogger::new();
        memory.log(&LogEvent::info("one"));
        assert_eq!(memory.events().len(), 1);
        memory.clear();
        assert!(memory.events().is_empty());
    }

    #[test]
    fn console_format_includes_code_and_context() {
        let event = LogEvent::error(crate::logging::codes::lexical::UNEXPECTED_TOKEN, "boom")
            .with_context("position", 4.to_string());
        let line = ConsoleLogger::format(&event);
        assert_eq!(line, "[ERROR L002] boom position=4");
    }
}
