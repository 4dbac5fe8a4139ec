//! View-model handed to the presentation layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::events::Event;
use crate::habit::{Habit, HabitCategory, HabitId};

/// One habit as shown in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitCard {
    pub id: HabitId,
    pub name: String,
    pub category: HabitCategory,
    pub color: String,
    pub streak: u32,
    pub done_today: bool,
}

impl HabitCard {
    pub fn new(habit: &Habit, today: NaiveDate) -> Self {
        Self {
            id: habit.id,
            name: habit.name.clone(),
            category: habit.category,
            color: habit.color.clone(),
            streak: habit.streak,
            done_today: habit.done_on(today),
        }
    }
}

pub fn cards(habits: &[Habit], today: NaiveDate) -> Vec<HabitCard> {
    habits.iter().map(|h| HabitCard::new(h, today)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Error,
}

/// Short user-facing feedback for one intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub level: Level,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}

impl From<&Event> for Toast {
    fn from(event: &Event) -> Self {
        Toast::success(event.message())
    }
}

impl From<&CoreError> for Toast {
    fn from(err: &CoreError) -> Self {
        Toast::error(err.to_string())
    }
}
