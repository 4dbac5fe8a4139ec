//! Explicit context tying lifecycle rules to the store.
//!
//! Each intent takes `&mut self`, runs the lifecycle rule on a copy of the
//! list, and persists the copy before it becomes current. A rejected intent
//! therefore never changes memory or storage.

use chrono::{NaiveDate, Utc};

use crate::error::Result;
use crate::events::Event;
use crate::habit::{HabitCategory, HabitId, HabitLifecycle};
use crate::stats::Dashboard;
use crate::storage::{HabitPersistence, HabitStore};
use crate::view::{cards, HabitCard};

pub struct HabitTracker<P: HabitPersistence> {
    store: HabitStore<P>,
    lifecycle: HabitLifecycle,
}

impl<P: HabitPersistence> HabitTracker<P> {
    pub fn new(store: HabitStore<P>) -> Self {
        let lifecycle = HabitLifecycle::for_habits(store.habits());
        Self { store, lifecycle }
    }

    /// Open the store under `key` and wrap it.
    pub fn open(backend: P, key: impl Into<String>) -> Self {
        Self::new(HabitStore::open(backend, key))
    }

    pub fn habits(&self) -> &[crate::habit::Habit] {
        self.store.habits()
    }

    pub fn store(&self) -> &HabitStore<P> {
        &self.store
    }

    /// `create(name, category, color)` intent.
    pub fn create(&mut self, name: &str, category: HabitCategory, color: &str) -> Result<Event> {
        let habit = self.lifecycle.create(name, category, color)?;
        let event = Event::HabitCreated {
            id: habit.id,
            name: habit.name.clone(),
            at: Utc::now(),
        };
        let mut next = self.store.habits().to_vec();
        next.push(habit);
        self.store.replace_all(next)?;
        Ok(event)
    }

    /// `toggle(id)` intent: complete habit `id` for `today`.
    pub fn toggle(&mut self, id: HabitId, today: NaiveDate) -> Result<Event> {
        let mut next = self.store.habits().to_vec();
        let habit = HabitLifecycle::complete(&mut next, id, today)?;
        let event = Event::HabitCompleted {
            id,
            name: habit.name.clone(),
            streak: habit.streak,
            date: today,
        };
        self.store.replace_all(next)?;
        Ok(event)
    }

    /// `delete(id)` intent. Unknown ids succeed without removing anything.
    pub fn delete(&mut self, id: HabitId) -> Result<Event> {
        let before = self.store.habits().len();
        let next = HabitLifecycle::delete(self.store.habits().to_vec(), id);
        let removed = next.len() != before;
        self.store.replace_all(next)?;
        Ok(Event::HabitDeleted { id, removed })
    }

    pub fn cards(&self, today: NaiveDate) -> Vec<HabitCard> {
        cards(self.store.habits(), today)
    }

    pub fn dashboard(&self, today: NaiveDate) -> Dashboard {
        Dashboard::compute(self.store.habits(), today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};
    use crate::storage::{MemoryPersistence, DEFAULT_STORAGE_KEY};

    fn tracker() -> HabitTracker<MemoryPersistence> {
        HabitTracker::open(MemoryPersistence::new(), DEFAULT_STORAGE_KEY)
    }

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, n).unwrap()
    }

    #[test]
    fn every_accepted_intent_saves_once() {
        let mut t = tracker();
        let Event::HabitCreated { id, .. } = t.create("Read", HabitCategory::Personal, "").unwrap()
        else {
            panic!("expected HabitCreated");
        };
        assert_eq!(t.store().backend().writes(), 1);

        t.toggle(id, day(19)).unwrap();
        assert_eq!(t.store().backend().writes(), 2);

        t.delete(id).unwrap();
        assert_eq!(t.store().backend().writes(), 3);
        assert!(t.habits().is_empty());
    }

    #[test]
    fn rejected_intents_do_not_save() {
        let mut t = tracker();
        let err = t.create("  ", HabitCategory::Work, "").unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::EmptyName)));
        assert!(t.toggle(5, day(19)).is_err());
        assert_eq!(t.store().backend().writes(), 0);
        assert!(t.habits().is_empty());
    }

    #[test]
    fn duplicate_toggle_leaves_state_alone() {
        let mut t = tracker();
        t.create("Read", HabitCategory::Personal, "").unwrap();
        let id = t.habits()[0].id;
        t.toggle(id, day(19)).unwrap();
        let snapshot = t.habits().to_vec();

        let err = t.toggle(id, day(19)).unwrap_err();
        assert_eq!(err.to_string(), "Already completed today");
        assert_eq!(t.habits(), snapshot.as_slice());
        assert_eq!(t.store().backend().writes(), 2);
    }

    #[test]
    fn delete_unknown_reports_not_removed() {
        let mut t = tracker();
        t.create("Read", HabitCategory::Personal, "").unwrap();
        let event = t.delete(12345).unwrap();
        assert_eq!(event, Event::HabitDeleted { id: 12345, removed: false });
        assert_eq!(t.habits().len(), 1);
    }

    #[test]
    fn reopened_tracker_sees_saved_state_and_fresh_ids() {
        let mut t = tracker();
        t.create("Read", HabitCategory::Personal, "").unwrap();
        let value = t.store().backend().value(DEFAULT_STORAGE_KEY).unwrap().to_string();

        let backend = MemoryPersistence::with_value(DEFAULT_STORAGE_KEY, &value);
        let mut reopened = HabitTracker::open(backend, DEFAULT_STORAGE_KEY);
        assert_eq!(reopened.habits(), t.habits());
        reopened.create("Run", HabitCategory::Fitness, "").unwrap();
        assert!(reopened.habits()[1].id > reopened.habits()[0].id);
    }

    #[test]
    fn view_model_reflects_latest_save() {
        let mut t = tracker();
        t.create("Read", HabitCategory::Personal, "").unwrap();
        t.create("Run", HabitCategory::Fitness, "").unwrap();
        let id = t.habits()[1].id;
        t.toggle(id, day(19)).unwrap();

        let cards = t.cards(day(19));
        assert!(!cards[0].done_today);
        assert!(cards[1].done_today);
        let dash = t.dashboard(day(19));
        assert_eq!((dash.today_completed, dash.pending_today), (1, 1));
    }
}
