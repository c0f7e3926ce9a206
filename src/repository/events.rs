use chrono::NaiveDate;

use super::{collection, require, Repository};
use crate::error::Result;
use crate::models::CalendarEvent;
use crate::storage::KeyValueStore;

impl<S: KeyValueStore> Repository<CalendarEvent, S> {
    pub fn add_event(
        &self,
        title: &str,
        date: NaiveDate,
        description: Option<&str>,
    ) -> Result<CalendarEvent> {
        require(title, "Event title")?;

        let items = self.load_all()?;
        let mut event = CalendarEvent::new(collection::next_id(&items)?, title.trim(), date);
        if let Some(description) = description.map(str::trim).filter(|d| !d.is_empty()) {
            event = event.with_description(description);
        }

        self.save_all(&collection::add(items, event.clone()))?;
        Ok(event)
    }

    /// Events whose date is exactly `date`, in stored order.
    pub fn events_on(&self, date: NaiveDate) -> Result<Vec<CalendarEvent>> {
        let mut events = self.load_all()?;
        events.retain(|event| event.date == date);
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::EventRepository;
    use crate::storage::MemoryStore;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn test_add_event_newest_first() {
        let repo = EventRepository::new(MemoryStore::new());
        repo.add_event("Standup", date(2), None).unwrap();
        let second = repo.add_event("Review", date(3), Some("Sprint 4")).unwrap();

        let events = repo.load_all().unwrap();
        assert_eq!(events[0], second);
        assert_eq!(second.id, 2);
        assert_eq!(second.description.as_deref(), Some("Sprint 4"));
    }

    #[test]
    fn test_blank_description_is_dropped() {
        let repo = EventRepository::new(MemoryStore::new());
        let event = repo.add_event("Gym", date(1), Some("  ")).unwrap();
        assert!(event.description.is_none());
    }

    #[test]
    fn test_events_on_exact_date() {
        let repo = EventRepository::new(MemoryStore::new());
        repo.add_event("A", date(1), None).unwrap();
        repo.add_event("B", date(2), None).unwrap();
        repo.add_event("C", date(1), None).unwrap();

        let titles: Vec<String> = repo
            .events_on(date(1))
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["C", "A"]);
        assert!(repo.events_on(date(9)).unwrap().is_empty());
    }

    #[test]
    fn test_replace_event() {
        let repo = EventRepository::new(MemoryStore::new());
        let mut event = repo.add_event("Lunch", date(4), None).unwrap();
        event.date = date(5);

        assert!(repo.replace(event.clone()).unwrap());
        assert_eq!(repo.find(event.id).unwrap(), Some(event));
    }
}
