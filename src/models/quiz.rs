use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Entity;
use crate::storage::StoreKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Difficulty selection when starting a quiz; `All` keeps every question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyFilter {
    #[default]
    All,
    Easy,
    Medium,
    Hard,
}

impl DifficultyFilter {
    pub fn accepts(&self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Easy => difficulty == Difficulty::Easy,
            DifficultyFilter::Medium => difficulty == Difficulty::Medium,
            DifficultyFilter::Hard => difficulty == Difficulty::Hard,
        }
    }
}

impl fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyFilter::All => write!(f, "all"),
            DifficultyFilter::Easy => write!(f, "easy"),
            DifficultyFilter::Medium => write!(f, "medium"),
            DifficultyFilter::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for DifficultyFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(DifficultyFilter::All),
            "easy" => Ok(DifficultyFilter::Easy),
            "medium" => Ok(DifficultyFilter::Medium),
            "hard" => Ok(DifficultyFilter::Hard),
            _ => Err(format!(
                "Invalid difficulty '{}'. Valid options: all, easy, medium, hard",
                s
            )),
        }
    }
}

/// A multiple-choice question. `correct_answer` indexes into `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation: String,
    pub difficulty: Difficulty,
}

/// Outcome of one finished quiz, kept in quiz history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub id: u64,
    pub subject: String,
    pub difficulty: DifficultyFilter,
    pub score: u32,
    pub total_questions: u32,
    pub percentage: u32,
    pub completed_at: DateTime<Utc>,
    /// Whole minutes, rounded.
    pub time_spent: u32,
}

impl Entity for QuizResult {
    const KEY: StoreKey = StoreKey::QuizHistory;

    fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Display for QuizResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {} ({}): {}/{} ({}%) in {} min",
            self.completed_at.format("%Y-%m-%d %H:%M"),
            self.subject,
            self.difficulty,
            self.score,
            self.total_questions,
            self.percentage,
            self.time_spent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_accepts() {
        assert!(DifficultyFilter::All.accepts(Difficulty::Hard));
        assert!(DifficultyFilter::Medium.accepts(Difficulty::Medium));
        assert!(!DifficultyFilter::Medium.accepts(Difficulty::Hard));
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!(
            DifficultyFilter::from_str("ALL").unwrap(),
            DifficultyFilter::All
        );
        assert!(DifficultyFilter::from_str("insane").is_err());
    }

    #[test]
    fn test_question_json_shape() {
        let question: Question = serde_json::from_str(
            r#"{"id":1,"question":"2+2?","options":["3","4"],"correctAnswer":1,"difficulty":"easy"}"#,
        )
        .unwrap();
        assert_eq!(question.correct_answer, 1);
        assert!(question.explanation.is_empty());
    }
}
