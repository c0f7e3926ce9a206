//! Study hub quizzes.

mod bank;
mod engine;

pub use bank::QuestionBank;
pub use engine::{AnswerOutcome, CompletedQuiz, QuizEngine, QuizSession, QuizState, ReviewItem};
