//! Creation, once-per-day completion and deletion of habits.
//!
//! ## Completion rule
//!
//! ```text
//! lastDate == today            -> AlreadyCompleted, nothing changes
//! today not yet in history     -> push today, streak += 1
//! always (on success)          -> lastDate = today
//! ```

use chrono::NaiveDate;

use super::{Habit, HabitCategory, HabitId, DEFAULT_COLOR};
use crate::error::{CoreError, Result, ValidationError};

/// Strictly increasing id source.
///
/// Ids keep the millisecond-timestamp shape of older records, but each one
/// is at least one greater than the previous, so two habits created in the
/// same millisecond still get distinct ids.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: HabitId,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed past every id already in use.
    pub fn seeded(habits: &[Habit]) -> Self {
        Self {
            last: habits.iter().map(|h| h.id).max().unwrap_or(0),
        }
    }

    /// # Errors
    ///
    /// Returns [`CoreError::IdsExhausted`] once `u64::MAX` has been handed out.
    pub fn next_id(&mut self) -> Result<HabitId> {
        self.next_at(now_ms())
    }

    /// Next id given the current clock reading in epoch milliseconds.
    pub fn next_at(&mut self, now_ms: u64) -> Result<HabitId> {
        let floor = self.last.checked_add(1).ok_or(CoreError::IdsExhausted)?;
        let id = now_ms.max(floor);
        self.last = id;
        Ok(id)
    }
}

/// Rules for creating, completing and deleting habits.
#[derive(Debug, Clone, Default)]
pub struct HabitLifecycle {
    ids: IdGenerator,
}

impl HabitLifecycle {
    pub fn new(ids: IdGenerator) -> Self {
        Self { ids }
    }

    /// Lifecycle whose ids never collide with `habits`.
    pub fn for_habits(habits: &[Habit]) -> Self {
        Self::new(IdGenerator::seeded(habits))
    }

    /// Build a new habit with no completions.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] if `name` is blank after trimming.
    pub fn create(&mut self, name: &str, category: HabitCategory, color: &str) -> Result<Habit> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        let color = match color.trim() {
            "" => DEFAULT_COLOR.to_string(),
            c => c.to_string(),
        };

        let habit = Habit {
            id: self.ids.next_id()?,
            name: name.to_string(),
            category,
            color,
            streak: 0,
            last_date: None,
            history: Vec::new(),
        };
        tracing::info!(id = habit.id, name = %habit.name, "habit created");
        Ok(habit)
    }

    /// Mark habit `id` done for `today`.
    ///
    /// # Errors
    ///
    /// [`CoreError::NotFound`] if no habit has `id`; [`CoreError::AlreadyCompleted`]
    /// if it was already completed on `today`; [`CoreError::StreakLimit`] if
    /// the streak cannot be incremented. None of these touch the list.
    pub fn complete(habits: &mut [Habit], id: HabitId, today: NaiveDate) -> Result<&Habit> {
        let habit = habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or(CoreError::NotFound { id })?;

        if habit.last_date == Some(today) {
            return Err(CoreError::AlreadyCompleted { id, date: today });
        }

        let first_on_day = !habit.history.contains(&today);
        let streak = if first_on_day {
            habit
                .streak
                .checked_add(1)
                .ok_or(CoreError::StreakLimit { id })?
        } else {
            habit.streak
        };

        habit.last_date = Some(today);
        if first_on_day {
            habit.history.push(today);
            habit.streak = streak;
        }
        tracing::info!(id, streak = habit.streak, %today, "habit completed");
        Ok(&*habit)
    }

    /// Remove habit `id`. Unknown ids leave the list as it was.
    pub fn delete(mut habits: Vec<Habit>, id: HabitId) -> Vec<Habit> {
        let before = habits.len();
        habits.retain(|h| h.id != id);
        if habits.len() != before {
            tracing::info!(id, "habit deleted");
        }
        habits
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
