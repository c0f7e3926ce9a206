//! Question bank: questions grouped by subject.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{Difficulty, DifficultyFilter, Question};

/// Questions keyed by subject name.
///
/// On disk a bank is a YAML (or JSON) mapping from subject to a list of
/// questions:
///
/// ```yaml
/// english:
///   - id: 1
///     question: "What is the synonym of 'Ubiquitous'?"
///     options: [Rare, Omnipresent, Hidden, Specific]
///     correctAnswer: 1
///     difficulty: hard
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct QuestionBank {
    subjects: BTreeMap<String, Vec<Question>>,
}

impl QuestionBank {
    pub fn new(subjects: BTreeMap<String, Vec<Question>>) -> Self {
        Self { subjects }
    }

    /// The bank shipped with the application.
    pub fn builtin() -> Self {
        let mut subjects = BTreeMap::new();
        subjects.insert(
            "english".to_string(),
            vec![
                question(
                    1,
                    "Which of the following is the correct passive voice of 'The teacher teaches the students'?",
                    &[
                        "The students are taught by the teacher",
                        "The students were taught by the teacher",
                        "The students have been taught by the teacher",
                        "The students will be taught by the teacher",
                    ],
                    0,
                    "Present tense passive voice uses 'are/is + past participle'",
                    Difficulty::Medium,
                ),
                question(
                    2,
                    "What is the synonym of 'Ubiquitous'?",
                    &["Rare", "Omnipresent", "Hidden", "Specific"],
                    1,
                    "Ubiquitous means present everywhere at the same time",
                    Difficulty::Hard,
                ),
            ],
        );
        subjects.insert(
            "reasoning".to_string(),
            vec![question(
                3,
                "If all roses are flowers and some flowers are red, which conclusion is valid?",
                &[
                    "All roses are red",
                    "Some roses may be red",
                    "No roses are red",
                    "All red things are roses",
                ],
                1,
                "We can only conclude that some roses may be red, not that all are",
                Difficulty::Medium,
            )],
        );
        Self { subjects }
    }

    /// Reads a bank from a YAML or JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::QuestionBankRead {
            path: path.to_path_buf(),
            source,
        })?;
        let bank: QuestionBank =
            serde_yaml::from_str(&contents).map_err(|source| Error::QuestionBankParse {
                path: path.to_path_buf(),
                source,
            })?;
        bank.validate().map_err(|reason| Error::InvalidQuestionBank {
            path: path.to_path_buf(),
            reason,
        })?;
        tracing::debug!(
            "Loaded {} subject(s) from {}",
            bank.subjects.len(),
            path.display()
        );
        Ok(bank)
    }

    /// Every subject needs at least one question, and every question needs
    /// options with `correct_answer` among them.
    fn validate(&self) -> std::result::Result<(), String> {
        for (subject, questions) in &self.subjects {
            if questions.is_empty() {
                return Err(format!("subject '{}' has no questions", subject));
            }
            for question in questions {
                if question.options.is_empty() {
                    return Err(format!(
                        "question {} in '{}' has no options",
                        question.id, subject
                    ));
                }
                if question.correct_answer >= question.options.len() {
                    return Err(format!(
                        "question {} in '{}' has correctAnswer {} but only {} options",
                        question.id,
                        subject,
                        question.correct_answer,
                        question.options.len()
                    ));
                }
            }
        }
        Ok(())
    }

    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.subjects.keys().map(String::as_str)
    }

    /// Questions for `subject` that pass `filter`, in bank order. An unknown
    /// subject yields nothing.
    pub fn select(&self, subject: &str, filter: DifficultyFilter) -> Vec<Question> {
        self.subjects
            .get(subject)
            .map(|questions| {
                questions
                    .iter()
                    .filter(|q| filter.accepts(q.difficulty))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn question(
    id: u32,
    text: &str,
    options: &[&str],
    correct_answer: usize,
    explanation: &str,
    difficulty: Difficulty,
) -> Question {
    Question {
        id,
        question: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer,
        explanation: explanation.to_string(),
        difficulty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_subjects() {
        let bank = QuestionBank::builtin();
        let subjects: Vec<_> = bank.subjects().collect();
        assert_eq!(subjects, vec!["english", "reasoning"]);
    }

    #[test]
    fn test_select_by_difficulty() {
        let bank = QuestionBank::builtin();

        assert_eq!(bank.select("english", DifficultyFilter::All).len(), 2);

        let hard = bank.select("english", DifficultyFilter::Hard);
        assert_eq!(hard.len(), 1);
        assert_eq!(hard[0].id, 2);

        assert!(bank.select("english", DifficultyFilter::Easy).is_empty());
        assert!(bank.select("history", DifficultyFilter::All).is_empty());
    }

    #[test]
    fn test_load_yaml_bank() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bank.yaml");
        fs::write(
            &path,
            r#"
math:
  - id: 10
    question: "2 + 2?"
    options: ["3", "4"]
    correctAnswer: 1
    difficulty: easy
"#,
        )
        .unwrap();

        let bank = QuestionBank::load(&path).unwrap();
        let questions = bank.select("math", DifficultyFilter::Easy);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answer, 1);
    }

    #[test]
    fn test_load_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.yaml");
        assert!(matches!(
            QuestionBank::load(&missing),
            Err(Error::QuestionBankRead { .. })
        ));

        let bad = dir.path().join("bad.yaml");
        fs::write(&bad, "math: [ {id: nope} ]").unwrap();
        assert!(matches!(
            QuestionBank::load(&bad),
            Err(Error::QuestionBankParse { .. })
        ));
    }

    #[test]
    fn test_load_rejects_unanswerable_questions() {
        let dir = TempDir::new().unwrap();
        let cases = [
            ("no_options.yaml", "math:\n  - {id: 1, question: q, options: [], correctAnswer: 0, difficulty: easy}\n"),
            ("out_of_range.yaml", "math:\n  - {id: 1, question: q, options: [a, b], correctAnswer: 2, difficulty: easy}\n"),
            ("empty_subject.yaml", "math: []\n"),
        ];

        for (name, contents) in cases {
            let path = dir.path().join(name);
            fs::write(&path, contents).unwrap();
            let err = QuestionBank::load(&path).unwrap_err();
            assert!(
                matches!(err, Error::InvalidQuestionBank { .. }),
                "{} loaded: {:?}",
                name,
                err
            );
        }
    }

    #[test]
    fn test_builtin_bank_is_valid() {
        assert!(QuestionBank::builtin().validate().is_ok());
    }
}
