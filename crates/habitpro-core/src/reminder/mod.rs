//! Reminder sweep for habits not yet done today.
//!
//! [`ReminderScheduler::tick`] is one sweep and is what tests drive.
//! [`ReminderHandle`] runs that sweep on a fixed period until stopped.

mod handle;

pub use handle::ReminderHandle;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::habit::{Habit, HabitId};

pub const DEFAULT_TITLE: &str = "HabitPro Reminder";

/// Delivers notifications on behalf of the scheduler.
pub trait Notifier: Send + Sync {
    /// Whether the user allowed notifications.
    fn permission_granted(&self) -> bool;

    fn notify(&self, title: &str, body: &str);
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn permission_granted(&self) -> bool {
        (**self).permission_granted()
    }

    fn notify(&self, title: &str, body: &str) {
        (**self).notify(title, body)
    }
}

/// One delivered reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub habit_id: HabitId,
    pub title: String,
    pub body: String,
}

/// Habits not completed on `today`.
pub fn pending(habits: &[Habit], today: NaiveDate) -> impl Iterator<Item = &Habit> {
    habits.iter().filter(move |h| !h.done_on(today))
}

/// Decides when and for which habits to notify.
#[derive(Debug)]
pub struct ReminderScheduler<N> {
    notifier: N,
    title: String,
}

impl<N: Notifier> ReminderScheduler<N> {
    pub fn new(notifier: N) -> Self {
        Self::with_title(notifier, DEFAULT_TITLE)
    }

    pub fn with_title(notifier: N, title: impl Into<String>) -> Self {
        Self {
            notifier,
            title: title.into(),
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Run one sweep: one reminder per pending habit, but only when
    /// permission is granted. Returns what was delivered.
    pub fn tick(&self, habits: &[Habit], today: NaiveDate) -> Vec<Reminder> {
        if !self.notifier.permission_granted() {
            tracing::debug!("reminder tick skipped, notifications not granted");
            return Vec::new();
        }

        let reminders: Vec<Reminder> = pending(habits, today)
            .map(|h| Reminder {
                habit_id: h.id,
                title: self.title.clone(),
                body: format!("Don't forget to {}!", h.name),
            })
            .collect();

        for reminder in &reminders {
            self.notifier.notify(&reminder.title, &reminder.body);
        }
        tracing::debug!(count = reminders.len(), %today, "reminder tick");
        reminders
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingNotifier;
    use super::*;
    use crate::habit::{HabitCategory, HabitLifecycle};

    fn setup() -> (Vec<Habit>, NaiveDate) {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let mut lifecycle = HabitLifecycle::default();
        let mut habits = vec![
            lifecycle.create("Read", HabitCategory::Learning, "").unwrap(),
            lifecycle.create("Drink water", HabitCategory::Health, "").unwrap(),
        ];
        let id = habits[0].id;
        HabitLifecycle::complete(&mut habits, id, today).unwrap();
        (habits, today)
    }

    #[test]
    fn tick_notifies_pending_habits_only() {
        let (habits, today) = setup();
        let scheduler = ReminderScheduler::new(RecordingNotifier::granted());

        let reminders = scheduler.tick(&habits, today);
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].habit_id, habits[1].id);
        assert_eq!(
            scheduler.notifier().sent(),
            vec![("HabitPro Reminder".to_string(), "Don't forget to Drink water!".to_string())]
        );
    }

    #[test]
    fn tick_without_permission_sends_nothing() {
        let (habits, today) = setup();
        let scheduler = ReminderScheduler::new(RecordingNotifier::default());
        assert!(scheduler.tick(&habits, today).is_empty());
        assert!(scheduler.notifier().sent().is_empty());
    }

    #[test]
    fn every_tick_repeats_reminders() {
        let (habits, today) = setup();
        let scheduler = ReminderScheduler::with_title(RecordingNotifier::granted(), "Nudge");
        scheduler.tick(&habits, today);
        scheduler.tick(&habits, today);
        let sent = scheduler.notifier().sent();
        assert_eq!(sent.len(), 2);
        assert!(sent.iter().all(|(title, _)| title == "Nudge"));
    }

    #[test]
    fn next_day_everything_is_pending() {
        let (habits, today) = setup();
        let tomorrow = today.succ_opt().unwrap();
        assert_eq!(pending(&habits, tomorrow).count(), 2);
    }
}
