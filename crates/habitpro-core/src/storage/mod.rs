mod config;
pub mod persistence;
pub mod store;

pub use config::{Config, NotificationsConfig, ReminderConfig, StorageConfig, UiConfig};
pub use persistence::{FilePersistence, HabitPersistence, MemoryPersistence};
pub use store::{decode_habits, encode_habits, HabitStore, DEFAULT_STORAGE_KEY};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the HabitPro data directory, creating it if needed.
///
/// `HABITPRO_DATA_DIR` wins when set. Otherwise `~/.config/habitpro`, or
/// `~/.config/habitpro-dev` when `HABITPRO_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("HABITPRO_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("HABITPRO_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("habitpro-dev")
            } else {
                base_dir.join("habitpro")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
