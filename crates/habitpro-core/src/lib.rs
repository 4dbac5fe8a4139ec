//! # HabitPro Core Library
//!
//! Business logic for the HabitPro habit tracker. The CLI binary is a thin
//! presentation layer over this crate.
//!
//! ## Architecture
//!
//! - **Habit model & lifecycle**: creation, once-per-day completion and
//!   deletion, with cumulative streaks
//! - **Storage**: the habit list persisted as one JSON value under one key,
//!   plus TOML configuration
//! - **Stats**: dashboard numbers and chart datasets derived from the list
//! - **Reminders**: periodic sweep notifying about habits not done today
//!
//! ## Key Components
//!
//! - [`HabitTracker`]: explicit context that applies intents and persists
//! - [`HabitStore`]: the authoritative list and its persistence bridge
//! - [`HabitLifecycle`]: the create / complete / delete rules
//! - [`ReminderScheduler`]: reminder sweep, with [`ReminderHandle`] to run it

pub mod error;
pub mod events;
pub mod habit;
pub mod quotes;
pub mod reminder;
pub mod stats;
pub mod storage;
pub mod tracker;
pub mod view;

pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use events::Event;
pub use habit::{today, Habit, HabitCategory, HabitId, HabitLifecycle, IdGenerator};
pub use reminder::{Notifier, Reminder, ReminderHandle, ReminderScheduler};
pub use stats::{ChartData, ChartKind, Dashboard};
pub use storage::{Config, FilePersistence, HabitPersistence, HabitStore, MemoryPersistence};
pub use tracker::HabitTracker;
pub use view::{HabitCard, Level, Toast};
