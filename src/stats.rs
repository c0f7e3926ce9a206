//! Figures derived from loaded collections. Nothing here touches storage.

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::models::{Completable, Habit, JournalEntry, QuizResult, Task, Todo, TrackedHabit};

pub fn completed_count<T: Completable>(items: &[T]) -> usize {
    items.iter().filter(|item| item.is_completed()).count()
}

pub fn total_count<T>(items: &[T]) -> usize {
    items.len()
}

/// `completed / total` as a whole percentage, halves rounded up. Zero when
/// there is nothing to count.
pub fn completion_percentage(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * completed + total) / (2 * total)) as u32
}

/// Returns `habit` with today's flag flipped.
///
/// The streak grows by one when the flag turns on and is left alone when it
/// turns off.
pub fn toggle_habit_streak(habit: &Habit) -> Habit {
    let completed = !habit.completed;
    let streak = if completed {
        habit.streak + 1
    } else {
        habit.streak
    };

    Habit {
        completed,
        streak,
        ..habit.clone()
    }
}

/// Rounded mean of the stored quiz percentages, 0 with no history.
pub fn average_quiz_score(history: &[QuizResult]) -> u32 {
    if history.is_empty() {
        return 0;
    }
    let sum: usize = history.iter().map(|r| r.percentage as usize).sum();
    completion_percentage(sum, history.len() * 100)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub pending_tasks: usize,
    pub completed_tasks: usize,
    pub active_habits: usize,
    pub habits_done_today: usize,
    pub journal_entries: usize,
    pub average_quiz_score: u32,
    pub todos_done: usize,
    pub todos_total: usize,
    pub daily_habits_done: usize,
    pub daily_habits_total: usize,
    /// Todos and daily habits together.
    pub completion_rate: u32,
}

/// Borrowed view of every collection the dashboard reads.
#[derive(Debug, Clone, Copy)]
pub struct Collections<'a> {
    pub todos: &'a [Todo],
    pub habits: &'a [Habit],
    pub tasks: &'a [Task],
    pub tracked_habits: &'a [TrackedHabit],
    pub journal: &'a [JournalEntry],
    pub quiz_history: &'a [QuizResult],
}

impl DashboardStats {
    pub fn compute<Tz: TimeZone>(data: Collections<'_>, now: &DateTime<Tz>) -> Self {
        let completed_tasks = completed_count(data.tasks);
        let todos_done = completed_count(data.todos);
        let daily_habits_done = completed_count(data.habits);
        let todos_total = total_count(data.todos);
        let daily_habits_total = total_count(data.habits);

        Self {
            pending_tasks: total_count(data.tasks) - completed_tasks,
            completed_tasks,
            active_habits: total_count(data.tracked_habits),
            habits_done_today: data
                .tracked_habits
                .iter()
                .filter(|habit| habit.completed_on(now))
                .count(),
            journal_entries: total_count(data.journal),
            average_quiz_score: average_quiz_score(data.quiz_history),
            todos_done,
            todos_total,
            daily_habits_done,
            daily_habits_total,
            completion_rate: completion_percentage(
                todos_done + daily_habits_done,
                todos_total + daily_habits_total,
            ),
        }
    }
}
