//! File logging setup.
//!
//! A TUI owns the terminal, so log output goes to a file instead of
//! stderr. Logging is off unless enabled in the configuration.

use anyhow::{anyhow, Result};
use std::path::PathBuf;

/// Initialize the global logger. A no-op when logging is disabled.
pub fn init(enabled: bool) -> Result<()> {
    if !enabled {
        return Ok(());
    }

    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
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
        .level(log::LevelFilter::Info)
        .chain(fern::log_file(&path)?)
        .apply()?;

    Ok(())
}

/// Location of the log file.
pub fn log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| anyhow!("Could not determine data directory"))?;
    Ok(data_dir.join("stickies").join("stickies.log"))
}
