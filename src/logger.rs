//! A minimal `log` backend writing timestamped lines to stderr

use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use std::io::{stderr, Write};
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger;

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file = record.file().unwrap_or("?");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        let line = record.line().unwrap_or(0);

        // stderr keeps log lines out of the board drawn on stdout
        let mut stderr = stderr().lock();
        let _ = writeln!(
            stderr,
            "[{}][{}][{}:{}] {}",
            timestamp,
            record.level(),
            file_name,
            line,
            record.args()
        );
    }

    fn flush(&self) {
        let _ = stderr().flush();
    }
}

/// Installs the logger. Fails if a logger was already installed.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| Logger);
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}
