// Logging utilities.
//
// Wraps flexi_logger initialization and shutdown so async log output is
// flushed before the process exits.

use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming, WriteMode,
};
use std::sync::Mutex;

use crate::config::LogConfig;
use crate::core::BenchResult;

/// Global logger handle, kept for flush on exit
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// Initialize the logging system from config.
///
/// Logs to a rotated file in the configured directory and duplicates
/// info-and-above to stderr so sweep progress is visible on the console.
pub fn init(config: &LogConfig) -> BenchResult<()> {
    let handle = Logger::try_with_str(&config.level)?
        .log_to_file(
            FileSpec::default()
                .basename(&config.file)
                .directory(&config.dir),
        )
        .rotate(
            Criterion::Size(config.max_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.max_files),
        )
        .duplicate_to_stderr(Duplicate::Info)
        .write_mode(WriteMode::Async)
        .append()
        .start()?;

    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        *guard = Some(handle);
    }

    log::info!("logging initialized: {}/{}", config.dir, config.file);
    Ok(())
}

/// Flush and shut down the logging system.
///
/// Blocks until the async writer has drained; call before process exit.
pub fn shutdown() {
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        if let Some(handle) = guard.take() {
            handle.flush();
        }
    }
}

/// Whether `init` has run and `shutdown` has not.
pub fn is_initialized() -> bool {
    LOGGER_HANDLE
        .lock()
        .map(|guard| guard.is_some())
        .unwrap_or(false)
}
