mod config;

pub use config::{AnalysisConfig, Config, DefaultsConfig};

use std::path::PathBuf;

use crate::error::Result;

/// Returns the configuration directory, creating it if needed.
///
/// Resolution order:
/// 1. `TASKPULSE_CONFIG_DIR`, used verbatim
/// 2. `~/.config/taskpulse-dev/` when `TASKPULSE_ENV=dev`
/// 3. `~/.config/taskpulse/`
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("TASKPULSE_CONFIG_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("TASKPULSE_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("taskpulse-dev")
            } else {
                base_dir.join("taskpulse")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
