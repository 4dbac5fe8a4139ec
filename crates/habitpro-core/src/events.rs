use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::habit::HabitId;

/// Every accepted intent produces an Event.
/// The presentation layer turns it into a message via [`Event::message`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    HabitCreated {
        id: HabitId,
        name: String,
        at: DateTime<Utc>,
    },
    HabitCompleted {
        id: HabitId,
        name: String,
        streak: u32,
        date: NaiveDate,
    },
    /// `removed` is false when the id was not in the list.
    HabitDeleted {
        id: HabitId,
        removed: bool,
    },
    ReminderRaised {
        habit_id: HabitId,
        title: String,
        body: String,
    },
}

impl Event {
    pub fn message(&self) -> String {
        match self {
            Event::HabitCreated { .. } => "Habit added".to_string(),
            Event::HabitCompleted { name, .. } => format!("Marked \"{name}\""),
            Event::HabitDeleted { .. } => "Habit deleted".to_string(),
            Event::ReminderRaised { body, .. } => body.clone(),
        }
    }
}

impl From<crate::reminder::Reminder> for Event {
    fn from(r: crate::reminder::Reminder) -> Self {
        Event::ReminderRaised {
            habit_id: r.habit_id,
            title: r.title,
            body: r.body,
        }
    }
}
