use chrono::{DateTime, Utc};

use super::{collection, require, Repository};
use crate::error::Result;
use crate::models::{JournalDraft, JournalEntry};
use crate::storage::KeyValueStore;

impl<S: KeyValueStore> Repository<JournalEntry, S> {
    pub fn add_journal_entry(&self, draft: JournalDraft) -> Result<JournalEntry> {
        self.add_journal_entry_at(draft, Utc::now())
    }

    pub fn add_journal_entry_at(
        &self,
        draft: JournalDraft,
        now: DateTime<Utc>,
    ) -> Result<JournalEntry> {
        require(&draft.title, "Title")?;
        require(&draft.content, "Content")?;

        let items = self.load_all()?;
        let entry = draft.into_entry(collection::timestamp_id(&items, now)?, now);
        self.save_all(&collection::add(items, entry.clone()))?;
        Ok(entry)
    }

    pub fn search_journal(&self, query: &str) -> Result<Vec<JournalEntry>> {
        let mut entries = self.load_all()?;
        entries.retain(|entry| entry.matches(query));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::repository::JournalRepository;
    use crate::storage::MemoryStore;

    #[test]
    fn test_title_and_content_required() {
        let repo = JournalRepository::new(MemoryStore::new());

        let err = repo
            .add_journal_entry(JournalDraft::new("", "body"))
            .unwrap_err();
        assert!(matches!(err, Error::Validation(ref m) if m == "Title is required"));

        let err = repo
            .add_journal_entry(JournalDraft::new("Title", "  "))
            .unwrap_err();
        assert!(matches!(err, Error::Validation(ref m) if m == "Content is required"));
    }

    #[test]
    fn test_entries_newest_first_and_searchable() {
        let repo = JournalRepository::new(MemoryStore::new());
        repo.add_journal_entry(JournalDraft::new("Monday", "Started the garden"))
            .unwrap();
        repo.add_journal_entry(JournalDraft::new("Tuesday", "Rain all day"))
            .unwrap();

        let entries = repo.load_all().unwrap();
        assert_eq!(entries[0].title, "Tuesday");

        let found = repo.search_journal("garden").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Monday");
    }
}
