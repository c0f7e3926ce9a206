use chrono::{DateTime, Utc};

use super::QuestionBank;
use crate::error::{Error, Result};
use crate::models::{DifficultyFilter, Question, QuizResult};
use crate::stats::completion_percentage;

/// A quiz being answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    pub subject: String,
    pub difficulty: DifficultyFilter,
    pub questions: Vec<Question>,
    pub current: usize,
    pub answers: Vec<usize>,
    pub started_at: DateTime<Utc>,
}

impl QuizSession {
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }
}

/// A finished session together with its scored result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedQuiz {
    pub session: QuizSession,
    pub result: QuizResult,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuizState {
    #[default]
    NotStarted,
    InProgress(QuizSession),
    Completed(CompletedQuiz),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The quiz continues at question `index`.
    Next { index: usize },
    Completed(QuizResult),
}

/// One line of the post-quiz review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    pub question: Question,
    pub chosen: usize,
    pub is_correct: bool,
}

impl ReviewItem {
    pub fn chosen_option(&self) -> Option<&str> {
        self.question.options.get(self.chosen).map(String::as_str)
    }

    pub fn correct_option(&self) -> Option<&str> {
        self.question
            .options
            .get(self.question.correct_answer)
            .map(String::as_str)
    }
}

/// Runs one quiz at a time over a question bank.
///
/// The engine never persists anything; callers store the finished
/// [`QuizResult`] through the quiz history repository.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    bank: QuestionBank,
    state: QuizState,
}

impl QuizEngine {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            state: QuizState::NotStarted,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// The question awaiting an answer, if a quiz is running.
    pub fn current_question(&self) -> Option<&Question> {
        match &self.state {
            QuizState::InProgress(session) => session.current_question(),
            _ => None,
        }
    }

    pub fn start_quiz(
        &mut self,
        subject: &str,
        difficulty: DifficultyFilter,
    ) -> Result<&Question> {
        self.start_quiz_at(subject, difficulty, Utc::now())
    }

    /// Starts a new session, replacing whatever state the engine was in.
    ///
    /// Fails with [`Error::NoQuestions`] and leaves the state untouched when
    /// nothing in the bank matches.
    pub fn start_quiz_at(
        &mut self,
        subject: &str,
        difficulty: DifficultyFilter,
        now: DateTime<Utc>,
    ) -> Result<&Question> {
        let questions = self.bank.select(subject, difficulty);
        if questions.is_empty() {
            return Err(Error::NoQuestions {
                subject: subject.to_string(),
                difficulty,
            });
        }

        tracing::debug!(
            "Starting {} quiz ({}) with {} question(s)",
            subject,
            difficulty,
            questions.len()
        );
        self.state = QuizState::InProgress(QuizSession {
            subject: subject.to_string(),
            difficulty,
            questions,
            current: 0,
            answers: Vec::new(),
            started_at: now,
        });

        match &self.state {
            QuizState::InProgress(session) => Ok(&session.questions[0]),
            _ => Err(Error::QuizNotInProgress),
        }
    }

    pub fn answer_question(&mut self, option: usize) -> Result<AnswerOutcome> {
        self.answer_question_at(option, Utc::now())
    }

    /// Records `option` for the current question.
    ///
    /// After the last question the session is scored and the engine moves to
    /// [`QuizState::Completed`].
    pub fn answer_question_at(
        &mut self,
        option: usize,
        now: DateTime<Utc>,
    ) -> Result<AnswerOutcome> {
        let QuizState::InProgress(session) = &mut self.state else {
            return Err(Error::QuizNotInProgress);
        };
        let Some(question) = session.current_question() else {
            return Err(Error::QuizNotInProgress);
        };
        if option >= question.options.len() {
            return Err(Error::validation(format!(
                "Option {} is out of range; question has {} options",
                option,
                question.options.len()
            )));
        }

        session.answers.push(option);
        if session.current + 1 < session.questions.len() {
            session.current += 1;
            return Ok(AnswerOutcome::Next {
                index: session.current,
            });
        }

        let session = session.clone();
        let result = score(&session, now);
        tracing::debug!(
            "Finished {} quiz: {}/{}",
            session.subject,
            result.score,
            result.total_questions
        );
        self.state = QuizState::Completed(CompletedQuiz {
            session,
            result: result.clone(),
        });
        Ok(AnswerOutcome::Completed(result))
    }

    /// Per-question breakdown of the finished quiz.
    pub fn review(&self) -> Option<Vec<ReviewItem>> {
        let QuizState::Completed(completed) = &self.state else {
            return None;
        };

        let items = completed
            .session
            .questions
            .iter()
            .zip(&completed.session.answers)
            .map(|(question, &chosen)| ReviewItem {
                question: question.clone(),
                chosen,
                is_correct: chosen == question.correct_answer,
            })
            .collect();
        Some(items)
    }

    pub fn retry_quiz(&mut self) -> Result<&Question> {
        self.retry_quiz_at(Utc::now())
    }

    /// Starts over with the subject and difficulty of the current or last
    /// session, discarding its answers.
    pub fn retry_quiz_at(&mut self, now: DateTime<Utc>) -> Result<&Question> {
        let (subject, difficulty) = match &self.state {
            QuizState::NotStarted => return Err(Error::QuizNotInProgress),
            QuizState::InProgress(session) => (session.subject.clone(), session.difficulty),
            QuizState::Completed(done) => (done.session.subject.clone(), done.session.difficulty),
        };
        self.start_quiz_at(&subject, difficulty, now)
    }
}

fn score(session: &QuizSession, now: DateTime<Utc>) -> QuizResult {
    let total = session.questions.len();
    let correct = session
        .questions
        .iter()
        .zip(&session.answers)
        .filter(|(question, answer)| **answer == question.correct_answer)
        .count();
    let elapsed_ms = (now - session.started_at).num_milliseconds().max(0);

    QuizResult {
        id: now.timestamp_millis().max(0) as u64,
        subject: session.subject.clone(),
        difficulty: session.difficulty,
        score: correct as u32,
        total_questions: total as u32,
        percentage: completion_percentage(correct, total),
        completed_at: now,
        time_spent: ((elapsed_ms + 30_000) / 60_000) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 1, 9, 0, 0).unwrap()
    }

    fn engine() -> QuizEngine {
        QuizEngine::new(QuestionBank::builtin())
    }

    #[test]
    fn test_perfect_score() {
        let mut quiz = engine();
        quiz.start_quiz_at("english", DifficultyFilter::All, start())
            .unwrap();

        assert_eq!(
            quiz.answer_question_at(0, start()).unwrap(),
            AnswerOutcome::Next { index: 1 }
        );
        assert_eq!(quiz.current_question().map(|q| q.id), Some(2));
        let AnswerOutcome::Completed(result) = quiz
            .answer_question_at(1, start() + Duration::seconds(100))
            .unwrap()
        else {
            panic!("quiz should be complete");
        };

        assert_eq!(result.score, 2);
        assert_eq!(result.total_questions, 2);
        assert_eq!(result.percentage, 100);
        assert_eq!(result.time_spent, 2);
        assert!(matches!(quiz.state(), QuizState::Completed(_)));
    }

    #[test]
    fn test_half_score_and_review() {
        let mut quiz = engine();
        quiz.start_quiz_at("english", DifficultyFilter::All, start())
            .unwrap();
        quiz.answer_question_at(0, start()).unwrap();
        let AnswerOutcome::Completed(result) = quiz
            .answer_question_at(0, start() + Duration::seconds(20))
            .unwrap()
        else {
            panic!("quiz should be complete");
        };

        assert_eq!(result.score, 1);
        assert_eq!(result.percentage, 50);
        assert_eq!(result.time_spent, 0);

        let review = quiz.review().unwrap();
        assert!(review[0].is_correct);
        assert!(!review[1].is_correct);
        assert_eq!(review[1].chosen_option(), Some("Rare"));
        assert_eq!(review[1].correct_option(), Some("Omnipresent"));
    }

    #[test]
    fn test_no_questions_leaves_state() {
        let mut quiz = engine();
        let err = quiz
            .start_quiz_at("english", DifficultyFilter::Easy, start())
            .unwrap_err();

        assert!(matches!(err, Error::NoQuestions { .. }));
        assert_eq!(quiz.state(), &QuizState::NotStarted);
    }

    #[test]
    fn test_answer_without_quiz() {
        let mut quiz = engine();
        assert!(matches!(
            quiz.answer_question(0),
            Err(Error::QuizNotInProgress)
        ));
    }

    #[test]
    fn test_answer_out_of_range() {
        let mut quiz = engine();
        quiz.start_quiz("reasoning", DifficultyFilter::All).unwrap();

        assert!(matches!(
            quiz.answer_question(4),
            Err(Error::Validation(_))
        ));
        let QuizState::InProgress(session) = quiz.state() else {
            panic!("quiz should still be running");
        };
        assert!(session.answers.is_empty());
    }

    #[test]
    fn test_answer_after_completion() {
        let mut quiz = engine();
        quiz.start_quiz("reasoning", DifficultyFilter::All).unwrap();
        quiz.answer_question(1).unwrap();

        assert!(matches!(
            quiz.answer_question(1),
            Err(Error::QuizNotInProgress)
        ));
    }

    #[test]
    fn test_retry_restarts_same_subject() {
        let mut quiz = engine();
        assert!(quiz.retry_quiz().is_err());

        quiz.start_quiz("english", DifficultyFilter::Hard).unwrap();
        quiz.answer_question(2).unwrap();
        let first = quiz.retry_quiz().unwrap().id;

        assert_eq!(first, 2);
        let QuizState::InProgress(session) = quiz.state() else {
            panic!("retry should start a session");
        };
        assert_eq!(session.subject, "english");
        assert_eq!(session.difficulty, DifficultyFilter::Hard);
        assert!(session.answers.is_empty());
        assert!(quiz.review().is_none());
    }
}
