//! Core error types for habitpro-core.
//!
//! Every error here is a local, recoverable condition. The presentation
//! layer turns them into a user-visible message; none of them should end
//! the process.

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

use crate::habit::HabitId;

/// Core error type for habitpro-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Input rejected before any state change
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Operation on an id that is not in the list
    #[error("Habit {id} not found")]
    NotFound { id: HabitId },

    /// Second completion on the same calendar day
    #[error("Already completed today")]
    AlreadyCompleted { id: HabitId, date: NaiveDate },

    /// Streak is already at its maximum value
    #[error("Streak for habit {id} cannot grow any further")]
    StreakLimit { id: HabitId },

    /// Every id up to the maximum is taken
    #[error("No habit ids left")]
    IdsExhausted,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors from the persistence backend
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name was empty after trimming
    #[error("Enter habit name")]
    EmptyName,

    /// Category name outside the fixed set
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Value could not be parsed into the key's type
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Data directory could not be resolved or created
    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
