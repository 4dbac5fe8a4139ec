//! Statistics module for HabitPro
//!
//! Read-only aggregates over the habit list. Every function here is a pure
//! function of the list and the caller's notion of today.

mod charts;

pub use charts::{completion_chart, streak_chart, weekly_chart, ChartData, ChartKind};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::habit::Habit;

/// Weekday labels in histogram order.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Habits whose most recent completion is `today`.
pub fn today_completed_count(habits: &[Habit], today: NaiveDate) -> usize {
    habits.iter().filter(|h| h.done_on(today)).count()
}

pub fn total_habits(habits: &[Habit]) -> usize {
    habits.len()
}

/// Highest streak in the list, or 0 for an empty list.
pub fn best_streak(habits: &[Habit]) -> u32 {
    habits.iter().map(|h| h.streak).max().unwrap_or(0)
}

/// Per weekday (Sun..Sat), the number of habits completed at least once on
/// that weekday, at any point in their history.
pub fn weekday_histogram(habits: &[Habit]) -> [u32; 7] {
    let mut counts = [0u32; 7];
    for habit in habits {
        let mut seen = [false; 7];
        for date in &habit.history {
            seen[date.weekday().num_days_from_sunday() as usize] = true;
        }
        for (count, hit) in counts.iter_mut().zip(seen) {
            if hit {
                *count += 1;
            }
        }
    }
    counts
}

/// `(completed_today, pending_today)`; the two always sum to the list length.
pub fn completion_split(habits: &[Habit], today: NaiveDate) -> (usize, usize) {
    let completed = today_completed_count(habits, today);
    (completed, total_habits(habits) - completed)
}

/// Dashboard numbers shown above the habit grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub date: NaiveDate,
    pub today_completed: usize,
    pub total_habits: usize,
    pub best_streak: u32,
    pub pending_today: usize,
    pub weekday_histogram: [u32; 7],
}

impl Dashboard {
    pub fn compute(habits: &[Habit], today: NaiveDate) -> Self {
        let (today_completed, pending_today) = completion_split(habits, today);
        Self {
            date: today,
            today_completed,
            total_habits: total_habits(habits),
            best_streak: best_streak(habits),
            pending_today,
            weekday_histogram: weekday_histogram(habits),
        }
    }
}
