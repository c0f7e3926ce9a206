use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Entity;
use crate::storage::StoreKey;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Custom,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Daily => write!(f, "daily"),
            Frequency::Weekly => write!(f, "weekly"),
            Frequency::Custom => write!(f, "custom"),
        }
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "custom" => Ok(Frequency::Custom),
            _ => Err(format!(
                "Invalid frequency '{}'. Valid options: daily, weekly, custom",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub completed: bool,
}

/// A habit that remembers when it was last completed and keeps a history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedHabit {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default)]
    pub reminder_time: Option<NaiveTime>,
    pub created_at: DateTime<Utc>,
    pub last_completed: Option<DateTime<Utc>>,
    pub streak: u32,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl TrackedHabit {
    /// True if `last_completed` falls on the same calendar day as `now`, in
    /// `now`'s time zone.
    pub fn completed_on<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> bool {
        let today = now.date_naive();
        self.last_completed
            .map(|last| last.with_timezone(&now.timezone()).date_naive() == today)
            .unwrap_or(false)
    }

    /// Marks the habit done for `now`'s day.
    ///
    /// Returns false and leaves the habit untouched if it was already
    /// completed that day.
    pub fn complete_at<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> bool {
        if self.completed_on(now) {
            return false;
        }

        self.last_completed = Some(now.with_timezone(&Utc));
        self.streak += 1;
        self.history.push(HistoryEntry {
            date: now.date_naive(),
            completed: true,
        });
        true
    }
}

impl Entity for TrackedHabit {
    const KEY: StoreKey = StoreKey::TrackedHabits;

    fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Display for TrackedHabit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {} ({}, {} day streak)",
            self.id, self.title, self.frequency, self.streak
        )?;
        if let Some(time) = self.reminder_time {
            write!(f, " reminder {}", time.format("%H:%M"))?;
        }
        Ok(())
    }
}

/// User input for a new tracked habit.
#[derive(Debug, Clone, Default)]
pub struct HabitDraft {
    pub title: String,
    pub frequency: Frequency,
    pub reminder_time: Option<NaiveTime>,
}

impl HabitDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_reminder_time(mut self, time: NaiveTime) -> Self {
        self.reminder_time = Some(time);
        self
    }

    pub fn into_habit(self, id: u64, created_at: DateTime<Utc>) -> TrackedHabit {
        TrackedHabit {
            id,
            title: self.title.trim().to_string(),
            frequency: self.frequency,
            reminder_time: self.reminder_time,
            created_at,
            last_completed: None,
            streak: 0,
            history: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_complete_sets_streak_and_history() {
        let mut habit = HabitDraft::new("Read").into_habit(1, at(2025, 1, 1, 8));
        let now = at(2025, 1, 2, 9);

        assert!(habit.complete_at(&now));

        assert_eq!(habit.streak, 1);
        assert_eq!(habit.last_completed, Some(now));
        assert_eq!(
            habit.history,
            vec![HistoryEntry {
                date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
                completed: true
            }]
        );
    }

    #[test]
    fn test_complete_twice_same_day_is_noop() {
        let mut habit = HabitDraft::new("Stretch").into_habit(1, at(2025, 1, 1, 8));
        let morning = at(2025, 1, 2, 7);

        assert!(habit.complete_at(&morning));
        let snapshot = habit.clone();

        assert!(!habit.complete_at(&(morning + Duration::hours(10))));
        assert_eq!(habit, snapshot);
    }

    #[test]
    fn test_complete_next_day_increments_again() {
        let mut habit = HabitDraft::new("Walk").into_habit(1, at(2025, 1, 1, 8));
        habit.complete_at(&at(2025, 1, 2, 7));
        habit.complete_at(&at(2025, 1, 3, 7));

        assert_eq!(habit.streak, 2);
        assert_eq!(habit.history.len(), 2);
        assert!(habit.completed_on(&at(2025, 1, 3, 23)));
        assert!(!habit.completed_on(&at(2025, 1, 4, 0)));
    }

    #[test]
    fn test_frequency_from_str() {
        assert_eq!(Frequency::from_str("Weekly").unwrap(), Frequency::Weekly);
        assert!(Frequency::from_str("hourly").is_err());
    }

    #[test]
    fn test_tracked_habit_json_shape() {
        let habit = HabitDraft::new("Journal")
            .with_reminder_time(NaiveTime::from_hms_opt(21, 30, 0).unwrap())
            .into_habit(3, at(2025, 1, 1, 8));
        let json = serde_json::to_value(&habit).unwrap();

        assert_eq!(json["frequency"], "daily");
        assert!(json["lastCompleted"].is_null());
        assert_eq!(json["reminderTime"], "21:30:00");
        assert_eq!(json["history"], serde_json::json!([]));
    }
}
