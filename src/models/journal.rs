use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::task::parse_tags;
use super::Entity;
use crate::storage::StoreKey;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Excited,
    #[default]
    Neutral,
    Anxious,
    Grateful,
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mood::Happy => write!(f, "happy"),
            Mood::Sad => write!(f, "sad"),
            Mood::Excited => write!(f, "excited"),
            Mood::Neutral => write!(f, "neutral"),
            Mood::Anxious => write!(f, "anxious"),
            Mood::Grateful => write!(f, "grateful"),
        }
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "excited" => Ok(Mood::Excited),
            "neutral" => Ok(Mood::Neutral),
            "anxious" => Ok(Mood::Anxious),
            "grateful" => Ok(Mood::Grateful),
            _ => Err(format!(
                "Invalid mood '{}'. Valid options: happy, sad, excited, neutral, anxious, grateful",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: u64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub word_count: usize,
}

impl JournalEntry {
    /// Case-insensitive substring match against title and content.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query) || self.content.to_lowercase().contains(&query)
    }
}

impl Entity for JournalEntry {
    const KEY: StoreKey = StoreKey::Journal;

    fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        writeln!(
            f,
            "{} | mood: {} | {} words",
            self.created_at.format("%Y-%m-%d %H:%M"),
            self.mood,
            self.word_count
        )?;
        if !self.tags.is_empty() {
            writeln!(f, "Tags: {}", self.tags.join(", "))?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.content)
    }
}

/// User input for a new journal entry.
#[derive(Debug, Clone, Default)]
pub struct JournalDraft {
    pub title: String,
    pub content: String,
    pub mood: Mood,
    /// Comma-separated tag list as typed by the user.
    pub tags: String,
}

impl JournalDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = mood;
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    pub fn into_entry(self, id: u64, created_at: DateTime<Utc>) -> JournalEntry {
        let word_count = word_count(&self.content);
        JournalEntry {
            id,
            title: self.title.trim().to_string(),
            content: self.content,
            mood: self.mood,
            tags: parse_tags(&self.tags),
            created_at,
            word_count,
        }
    }
}

/// Counts whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
