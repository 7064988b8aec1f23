use chrono::Local;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

static LOGGER: OnceLock<Logger> = OnceLock::new();
static WARNED_UNINITIALIZED: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
}

pub struct Logger {
    prefix: Option<String>,
    min_level: LogLevel,
}

impl Logger {
    fn new(prefix: Option<String>, min_level: LogLevel) -> Self {
        Self { prefix, min_level }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    pub fn format_line(&self, level: LogLevel, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let level = match level {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
        };
        match &self.prefix {
            Some(prefix) => format!("[{}][{}][{}] {}", timestamp, prefix, level, message),
            None => format!("[{}][{}] {}", timestamp, level, message),
        }
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if self.enabled(level) {
            println!("{}", self.format_line(level, message));
        }
    }
}

/// Set up the process-wide logger. Later calls are ignored.
pub fn init_logger(prefix: Option<String>, verbose: bool) {
    let min_level = if verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    LOGGER.get_or_init(|| Logger::new(prefix, min_level));
}

pub fn log(level: LogLevel, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, message);
    } else if !WARNED_UNINITIALIZED.swap(true, Ordering::Relaxed) {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Debug, &format!($($arg)*))
    };
}
