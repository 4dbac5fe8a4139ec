//! Habit data model and lifecycle rules.
//!
//! A [`Habit`] is one tracked behavior. Its `streak` counts the distinct
//! calendar days it was completed; it never resets on a missed day.

mod date;
mod lifecycle;

pub use date::{parse_date, today};
pub use lifecycle::{HabitLifecycle, IdGenerator};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Unique habit identifier.
pub type HabitId = u64;

/// Colour used when a record carries none.
pub const DEFAULT_COLOR: &str = "#4f46e5";

/// One tracked behavior.
///
/// Field names serialize in camelCase so the stored record keeps the
/// `id, name, category, color, streak, lastDate, history` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
    #[serde(default)]
    pub category: HabitCategory,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub streak: u32,
    #[serde(default, deserialize_with = "date::deserialize_opt")]
    pub last_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "date::deserialize_list")]
    pub history: Vec<NaiveDate>,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Habit {
    /// Whether the habit was completed on `today`.
    pub fn done_on(&self, today: NaiveDate) -> bool {
        self.last_date == Some(today)
    }

    /// Repair a record read from storage so the model invariants hold.
    ///
    /// Collapses duplicate history dates (keeping first occurrence order)
    /// and appends `last_date` to `history` if it is missing there.
    pub(crate) fn normalize(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.history.retain(|d| seen.insert(*d));
        if let Some(last) = self.last_date {
            if !self.history.contains(&last) {
                self.history.push(last);
            }
        }
    }
}

/// Fixed set of habit categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HabitCategory {
    Health,
    Fitness,
    Work,
    Learning,
    #[default]
    Personal,
    Other,
}

impl HabitCategory {
    pub const ALL: [HabitCategory; 6] = [
        HabitCategory::Health,
        HabitCategory::Fitness,
        HabitCategory::Work,
        HabitCategory::Learning,
        HabitCategory::Personal,
        HabitCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HabitCategory::Health => "Health",
            HabitCategory::Fitness => "Fitness",
            HabitCategory::Work => "Work",
            HabitCategory::Learning => "Learning",
            HabitCategory::Personal => "Personal",
            HabitCategory::Other => "Other",
        }
    }
}

impl fmt::Display for HabitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HabitCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        HabitCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownCategory(wanted.to_string()))
    }
}

// Stored records may carry categories from older builds; those load as Other.
impl From<String> for HabitCategory {
    fn from(value: String) -> Self {
        value.parse().unwrap_or(HabitCategory::Other)
    }
}

impl From<HabitCategory> for String {
    fn from(value: HabitCategory) -> Self {
        value.as_str().to_string()
    }
}
