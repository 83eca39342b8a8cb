//! File logging setup
//!
//! Wires the `log` facade to a file in the platform data directory when
//! logging is enabled in the config. Logging to stdout would corrupt the
//! alternate-screen TUI, so everything goes to disk.

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use std::path::PathBuf;

use crate::config::LoggingConfig;
use crate::constants::{APP_NAME, LOG_FILE_NAME};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize file logging according to the config
///
/// A no-op when logging is disabled or when called a second time.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled || INITIALIZED.get().is_some() {
        return Ok(());
    }

    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?)
        .apply()
        .context("Failed to install logger")?;

    INITIALIZED.set(()).ok();
    log::info!("logging initialized");
    Ok(())
}

/// Log file path under the platform data directory
pub fn log_file_path() -> Result<PathBuf> {
    dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_NAME).join(LOG_FILE_NAME))
}
