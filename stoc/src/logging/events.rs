//! Event system for compiler logging

use super::codes::Code;
use std::time::SystemTime;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// Core log event structure
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub timestamp: SystemTime,
    pub level: LogLevel,
    pub code: Option<Code>,
    pub message: String,
    pub context: Vec<(String, String)>,
}

impl LogEvent {
    fn new(level: LogLevel, code: Option<Code>, message: &str) -> Self {
        Self {
            timestamp: SystemTime::now(),
            level,
            code,
            message: message.to_string(),
            context: Vec::new(),
        }
    }

    /// Create a new error event
    pub fn error(code: Code, message: &str) -> Self {
        Self::new(LogLevel::Error, Some(code), message)
    }

    /// Create a new warning event
    pub fn warning(message: &str) -> Self {
        Self::new(LogLevel::Warning, None, message)
    }

    /// Create a new informational event
    pub fn info(message: &str) -> Self {
        Self::new(LogLevel::Info, None, message)
    }

    /// Create a new debug event
    pub fn debug(message: &str) -> Self {
        Self::new(LogLevel::Debug, None, message)
    }

    /// Create a success event (informational, code-carrying)
    pub fn success(code: Code, message: &str) -> Self {
        Self::new(LogLevel::Info, Some(code), message)
    }

    /// Attach a key/value context pair
    pub fn with_context(mut self, key: &str, value: String) -> Self {
        self.context.push((key.to_string(), value));
        self
    }
}
