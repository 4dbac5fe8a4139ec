//! Chart datasets for the dashboard.
//!
//! Only the data is produced here; drawing is the presentation layer's job.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{completion_split, weekday_histogram, WEEKDAY_LABELS};
use crate::habit::Habit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

/// Labels paired index-for-index with values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub data: Vec<u64>,
}

impl ChartData {
    fn new(kind: ChartKind, labels: Vec<String>, data: Vec<u64>) -> Self {
        debug_assert_eq!(labels.len(), data.len());
        Self { kind, labels, data }
    }

    /// `(label, value)` pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (&str, u64)> {
        self.labels.iter().map(String::as_str).zip(self.data.iter().copied())
    }
}

/// Bar chart of the weekday histogram.
pub fn weekly_chart(habits: &[Habit]) -> ChartData {
    ChartData::new(
        ChartKind::Bar,
        WEEKDAY_LABELS.iter().map(|l| l.to_string()).collect(),
        weekday_histogram(habits).iter().map(|&n| n as u64).collect(),
    )
}

/// Line chart with one point per habit: name against streak.
pub fn streak_chart(habits: &[Habit]) -> ChartData {
    ChartData::new(
        ChartKind::Line,
        habits.iter().map(|h| h.name.clone()).collect(),
        habits.iter().map(|h| h.streak as u64).collect(),
    )
}

/// Pie chart of completed vs. pending today.
pub fn completion_chart(habits: &[Habit], today: NaiveDate) -> ChartData {
    let (completed, pending) = completion_split(habits, today);
    ChartData::new(
        ChartKind::Pie,
        vec!["Completed".into(), "Pending".into()],
        vec![completed as u64, pending as u64],
    )
}
