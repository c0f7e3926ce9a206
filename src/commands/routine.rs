use chrono::{Local, NaiveTime};
use clap::{Args, Subcommand};

use sevenk::models::{Frequency, HabitDraft};
use sevenk::repository::Completion;
use sevenk::storage::FileStore;
use sevenk::Workspace;

use super::{CommandResult, OutputFormat};

/// Tracked habits: completed at most once per day, with history.
#[derive(Args)]
pub struct RoutineCommand {
    #[command(subcommand)]
    pub command: RoutineSubcommand,
}

#[derive(Subcommand)]
pub enum RoutineSubcommand {
    /// Start tracking a habit
    Add {
        /// Habit title
        title: String,

        /// Frequency: daily, weekly, custom
        #[arg(long, short, default_value = "daily")]
        frequency: Frequency,

        /// Reminder time (HH:MM:SS)
        #[arg(long)]
        reminder: Option<NaiveTime>,
    },

    /// List tracked habits and whether each is done today
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Complete a tracked habit for today
    Complete {
        /// Habit ID
        id: u64,
    },

    /// Stop tracking a habit
    Delete {
        /// Habit ID
        id: u64,
    },
}

impl RoutineCommand {
    pub fn run(&self, workspace: &Workspace<FileStore>) -> CommandResult {
        let repo = workspace.tracked_habits();

        match &self.command {
            RoutineSubcommand::Add {
                title,
                frequency,
                reminder,
            } => {
                let mut draft = HabitDraft::new(title.as_str()).with_frequency(*frequency);
                if let Some(time) = reminder {
                    draft = draft.with_reminder_time(*time);
                }

                let habit = repo.add_tracked_habit(draft)?;
                println!("Tracking habit:");
                println!("{}", habit);
                Ok(())
            }

            RoutineSubcommand::List { format } => {
                let habits = repo.load_all()?;

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&habits)?);
                    }
                    OutputFormat::Text => {
                        if habits.is_empty() {
                            println!("No tracked habits found");
                            return Ok(());
                        }
                        let now = Local::now();
                        for habit in &habits {
                            let mark = if habit.completed_on(&now) { "x" } else { " " };
                            println!("[{}] {}", mark, habit);
                        }
                    }
                }
                Ok(())
            }

            RoutineSubcommand::Complete { id } => {
                match repo.complete_tracked_habit(*id, &Local::now())? {
                    Completion::Completed(habit) => {
                        println!(
                            "Completed {}! Streak: {} day(s)",
                            habit.title, habit.streak
                        );
                        Ok(())
                    }
                    Completion::AlreadyDoneToday(habit) => {
                        println!("{} is already done today", habit.title);
                        Ok(())
                    }
                    Completion::NotFound => Err(format!("Habit not found: {}", id).into()),
                }
            }

            RoutineSubcommand::Delete { id } => {
                if !repo.delete(*id)? {
                    return Err(format!("Habit not found: {}", id).into());
                }
                println!("Stopped tracking habit {}", id);
                Ok(())
            }
        }
    }
}
