use super::{collection, Repository};
use crate::error::Result;
use crate::models::QuizResult;
use crate::storage::KeyValueStore;

impl<S: KeyValueStore> Repository<QuizResult, S> {
    /// Prepends a finished quiz to the history.
    ///
    /// The result keeps its id unless another stored result already uses
    /// it, in which case it is moved past the largest stored id.
    pub fn record_quiz(&self, mut result: QuizResult) -> Result<QuizResult> {
        let items = self.load_all()?;
        if items.iter().any(|existing| existing.id == result.id) {
            result.id = collection::next_id(&items)?.max(collection::after(result.id)?);
        }

        self.save_all(&collection::add(items, result.clone()))?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DifficultyFilter;
    use crate::repository::QuizHistoryRepository;
    use crate::storage::MemoryStore;
    use chrono::Utc;

    fn result(id: u64, score: u32) -> QuizResult {
        QuizResult {
            id,
            subject: "english".to_string(),
            difficulty: DifficultyFilter::All,
            score,
            total_questions: 2,
            percentage: score * 50,
            completed_at: Utc::now(),
            time_spent: 1,
        }
    }

    #[test]
    fn test_record_quiz_newest_first() {
        let repo = QuizHistoryRepository::new(MemoryStore::new());
        repo.record_quiz(result(10, 1)).unwrap();
        repo.record_quiz(result(20, 2)).unwrap();

        let history = repo.load_all().unwrap();
        assert_eq!(history[0].id, 20);
        assert_eq!(history[1].id, 10);
    }

    #[test]
    fn test_record_quiz_resolves_id_clash() {
        let repo = QuizHistoryRepository::new(MemoryStore::new());
        repo.record_quiz(result(10, 1)).unwrap();
        repo.record_quiz(result(30, 1)).unwrap();

        let stored = repo.record_quiz(result(10, 2)).unwrap();
        assert_eq!(stored.id, 31);
        assert_eq!(repo.load_all().unwrap().len(), 3);
    }

    #[test]
    fn test_record_quiz_clash_at_max_id() {
        let repo = QuizHistoryRepository::new(MemoryStore::new());
        repo.record_quiz(result(u64::MAX, 1)).unwrap();

        let err = repo.record_quiz(result(u64::MAX, 2)).unwrap_err();
        assert!(matches!(err, crate::error::Error::Validation(_)));
        assert_eq!(repo.load_all().unwrap().len(), 1);
    }
}
