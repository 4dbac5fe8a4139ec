//! The authoritative habit list and its bridge to persistence.
//!
//! The whole list is the unit of persistence: every change is a full
//! overwrite of one key, never a partial write.

use std::collections::HashSet;

use super::persistence::HabitPersistence;
use crate::error::Result;
use crate::habit::Habit;

/// Key the web widget used for its list; kept so exported data lines up.
pub const DEFAULT_STORAGE_KEY: &str = "habit_pro_v5";

/// Holds the current habit list and persists every replacement.
#[derive(Debug)]
pub struct HabitStore<P: HabitPersistence> {
    backend: P,
    key: String,
    habits: Vec<Habit>,
}

impl<P: HabitPersistence> HabitStore<P> {
    /// Open the store and load whatever the backend holds under `key`.
    pub fn open(backend: P, key: impl Into<String>) -> Self {
        let mut store = Self {
            backend,
            key: key.into(),
            habits: Vec::new(),
        };
        store.habits = store.load();
        store
    }

    /// Read the persisted list.
    ///
    /// Never fails: a missing value, a backend read error, or malformed
    /// content all yield an empty list.
    pub fn load(&self) -> Vec<Habit> {
        match self.backend.read(&self.key) {
            Ok(Some(raw)) => decode_habits(&raw),
            Ok(None) => {
                tracing::debug!(key = %self.key, "no stored habits");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read habits, starting empty");
                Vec::new()
            }
        }
    }

    /// Persist `habits` as the new full list, then make it current.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the write fails; the in-memory list is
    /// left as it was in that case.
    pub fn replace_all(&mut self, habits: Vec<Habit>) -> Result<()> {
        let encoded = encode_habits(&habits)?;
        self.backend.write(&self.key, &encoded)?;
        tracing::debug!(key = %self.key, count = habits.len(), "habits saved");
        self.habits = habits;
        Ok(())
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &P {
        &self.backend
    }
}

/// Serialize the list to its stored JSON form.
pub fn encode_habits(habits: &[Habit]) -> Result<String> {
    Ok(serde_json::to_string(habits)?)
}

/// Parse a stored list, repairing what can be repaired.
///
/// Anything that is not a JSON array loads as empty. Within the array,
/// records that fail to parse or have a blank name are dropped, as are
/// records repeating an id already seen.
pub fn decode_habits(raw: &str) -> Vec<Habit> {
    let records: Vec<serde_json::Value> = match serde_json::from_str::<Option<Vec<_>>>(raw) {
        Ok(records) => records.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(error = %e, "stored habits are malformed, starting empty");
            return Vec::new();
        }
    };

    let mut ids = HashSet::new();
    let mut habits = Vec::with_capacity(records.len());
    for record in records {
        let mut habit: Habit = match serde_json::from_value(record) {
            Ok(habit) => habit,
            Err(e) => {
                tracing::warn!(error = %e, "dropping malformed habit record");
                continue;
            }
        };
        habit.name = habit.name.trim().to_string();
        if habit.name.is_empty() {
            tracing::warn!(id = habit.id, "dropping habit record with empty name");
            continue;
        }
        if !ids.insert(habit.id) {
            tracing::warn!(id = habit.id, "dropping habit record with duplicate id");
            continue;
        }
        habit.normalize();
        habits.push(habit);
    }
    habits
}
