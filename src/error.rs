//! Crate-wide error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::DifficultyFilter;
use crate::storage::{StorageError, StoreKey};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Failed to serialize {key}: {source}")]
    Serialize {
        key: StoreKey,
        #[source]
        source: serde_json::Error,
    },

    /// A required field was blank or a value was out of range.
    #[error("{0}")]
    Validation(String),

    #[error("No questions available for subject '{subject}' ({difficulty})")]
    NoQuestions {
        subject: String,
        difficulty: DifficultyFilter,
    },

    #[error("No quiz in progress")]
    QuizNotInProgress,

    #[error("Failed to encode backup: {0}")]
    Export(#[source] serde_json::Error),

    #[error("Invalid backup file: {0}")]
    Import(#[source] serde_json::Error),

    #[error("Failed to read question bank '{}': {source}", .path.display())]
    QuestionBankRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse question bank '{}': {source}", .path.display())]
    QuestionBankParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid question bank '{}': {reason}", .path.display())]
    InvalidQuestionBank { path: PathBuf, reason: String },
}

impl Error {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
