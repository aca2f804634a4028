//! Level-filtered logging for the `git-default-branch` binary and library.
//!
//! Only `Info` is written to stdout. Everything else goes to stderr so that
//! `git default-branch get` can be consumed by scripts.

use std::io::Write;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
}

static LOG_LEVEL: OnceLock<LogLevel> = OnceLock::new();

pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    LOG_LEVEL.set(level).ok(); // Ignore errors if already set
}

pub fn get_log_level() -> LogLevel {
    *LOG_LEVEL.get().unwrap_or(&LogLevel::Info)
}

pub fn log(level: LogLevel, message: &str) {
    if level <= get_log_level() {
        let mut stdout = std::io::stdout().lock();
        let mut stderr = std::io::stderr().lock();
        write_log(level, message, &mut stdout, &mut stderr).ok();
    }
}

/// Write one log line, `Info` to `out` and every other level to `err`.
pub fn write_log(
    level: LogLevel,
    message: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> std::io::Result<()> {
    match level {
        LogLevel::Error => writeln!(err, "Error: {}", message),
        LogLevel::Warning => writeln!(err, "Warning: {}", message),
        LogLevel::Info => writeln!(out, "{}", message),
        LogLevel::Debug => writeln!(err, "Debug: {}", message),
    }
}

#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        $crate::logging::log($crate::logging::LogLevel::Warning, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logging::log($crate::logging::LogLevel::Debug, &format!($($arg)*))
    };
}
