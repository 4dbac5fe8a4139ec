pub mod config;
pub mod habit;
pub mod notify;
pub mod quote;
pub mod remind;
pub mod stats;
pub mod theme;

use habitpro_core::{Config, FilePersistence, HabitTracker};

/// Tracker over the file-backed store named by the config.
pub fn open_tracker(config: &Config) -> Result<HabitTracker<FilePersistence>, Box<dyn std::error::Error>> {
    let backend = FilePersistence::open()?;
    Ok(HabitTracker::open(backend, config.storage.key.clone()))
}
