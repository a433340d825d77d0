//! File logging backend for the desktop shell.
//!
//! The core crate only talks to the `log` facade; this module installs a
//! `flexi_logger` backend once per process. Files rotate by size, and
//! warnings are duplicated to stderr.

use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::Path;

const LOG_FILE_BASENAME: &str = "pocketnotes";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Starts file logging at `level` into `log_dir`.
///
/// Only the first successful call configures the backend; later calls return
/// `Ok(())` without changing anything. Never panics.
///
/// # Errors
///
/// Returns a human-readable message if `level` is unknown, `log_dir` cannot
/// be created, or the backend fails to start.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<(), String> {
    let level = normalize_level(level)?;

    LOGGER.get_or_try_init(|| -> Result<LoggerHandle, String> {
        std::fs::create_dir_all(log_dir).map_err(|e| {
            format!("failed to create log directory {}: {e}", log_dir.display())
        })?;

        let handle = Logger::try_with_str(level)
            .map_err(|e| format!("invalid log level `{level}`: {e}"))?
            .log_to_file(
                FileSpec::default()
                    .directory(log_dir)
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .duplicate_to_stderr(Duplicate::Warn)
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|e| format!("failed to start logger: {e}"))?;

        info!(
            "pocketnotes {} started level={level} log_dir={}",
            env!("CARGO_PKG_VERSION"),
            log_dir.display()
        );
        Ok(handle)
    })?;

    Ok(())
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}
