// Logging utilities
// Author: Gabriel Demetrios Lafis

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

/// Initialize coloured logging to stderr at the given level
pub fn init_logging(level: LevelFilter) -> Result<(), SetLoggerError> {
    init_logging_with(level, true)
}

/// Initialize logging, optionally without ANSI colours
pub fn init_logging_with(level: LevelFilter, color: bool) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(StderrLogger { level, color }))
        .map(|()| log::set_max_level(level))
}

/// Parse a level name; unknown names fall back to `warn`
pub fn parse_level(name: &str) -> LevelFilter {
    match name.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Warn,
    }
}

/// Writes to stderr so log lines never interleave with the dialogue on stdout
struct StderrLogger {
    level: LevelFilter,
    color: bool,
}

impl StderrLogger {
    fn tag(&self, level: Level) -> String {
        if !self.color {
            return level.to_string();
        }

        let code = match level {
            Level::Error => 31,
            Level::Warn => 33,
            Level::Info => 32,
            Level::Debug => 34,
            Level::Trace => 90,
        };
        format!("\x1B[{}m{}\x1B[0m", code, level)
    }
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let target = record
            .target()
            .strip_prefix("bikeshare_explorer::")
            .unwrap_or_else(|| record.target());

        eprintln!(
            "[{}] {} {}: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            self.tag(record.level()),
            target,
            record.args()
        );
    }

    fn flush(&self) {}
}
