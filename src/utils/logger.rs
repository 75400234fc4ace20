//! File-backed logging for commands and the log facade
//!
//! Commands write their reports through a `Logger` bound to the path
//! taken from the CLI configuration. The same type doubles as the
//! `log` crate backend, so `info!`/`debug!` records land in a file
//! and are mirrored to stdout for interactive runs.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::File;
use std::io::{self, Write};
use std::sync::Mutex;

/// File-backed logger shared by commands and the `log` facade
pub struct Logger {
    /// Open log file; stays None when writing is disabled
    file: Mutex<Option<File>>,
}

impl Logger {
    /// Open a logger writing to `log_file`, truncating any previous run
    pub fn new(log_file: &str) -> io::Result<Self> {
        Ok(Logger {
            file: Mutex::new(Some(File::create(log_file)?)),
        })
    }

    /// Append one line to the log file
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock().unwrap();
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Install a fresh `Logger` as the process-wide `log` backend
    ///
    /// Debug records pass through only when `verbose` is set;
    /// otherwise the level is capped at Info.
    pub fn init_global_logger(log_file: &str, verbose: bool) -> io::Result<()> {
        let backend = Logger::new(log_file)?;

        // Only the first installation can win; a second one is a
        // programming error worth a warning, not an abort.
        if log::set_boxed_logger(Box::new(backend)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        });
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!("[{}] {}", record.level(), record.args());
        let _ = self.log(&line);

        // Mirror to the console
        println!("{}", line);
    }

    fn flush(&self) {
        // Every write is flushed immediately
    }
}
