use clap::{Args, Subcommand};

use sevenk::storage::FileStore;
use sevenk::Workspace;

use super::{CommandResult, OutputFormat};

#[derive(Args)]
pub struct HabitCommand {
    #[command(subcommand)]
    pub command: HabitSubcommand,
}

#[derive(Subcommand)]
pub enum HabitSubcommand {
    /// Add a daily habit
    Add {
        /// Habit name
        name: String,
    },

    /// List habits with their streaks
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Mark a habit done for today, or undo it
    Toggle {
        /// Habit ID
        id: u64,
    },

    /// Delete a habit
    Delete {
        /// Habit ID
        id: u64,
    },
}

impl HabitCommand {
    pub fn run(&self, workspace: &Workspace<FileStore>) -> CommandResult {
        let repo = workspace.habits();

        match &self.command {
            HabitSubcommand::Add { name } => {
                let habit = repo.add_habit(name)?;
                println!("Added habit {}: {}", habit.id, habit.name);
                Ok(())
            }

            HabitSubcommand::List { format } => {
                let habits = repo.load_all()?;

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&habits)?);
                    }
                    OutputFormat::Text => {
                        if habits.is_empty() {
                            println!("No habits found");
                            return Ok(());
                        }
                        for habit in &habits {
                            println!("{}", habit);
                        }
                    }
                }
                Ok(())
            }

            HabitSubcommand::Toggle { id } => match repo.toggle_habit(*id)? {
                Some(habit) if habit.completed => {
                    println!("Done today! {} is on a {} day streak", habit.name, habit.streak);
                    Ok(())
                }
                Some(habit) => {
                    println!("Unmarked {}", habit.name);
                    Ok(())
                }
                None => Err(format!("Habit not found: {}", id).into()),
            },

            HabitSubcommand::Delete { id } => {
                if !repo.delete(*id)? {
                    return Err(format!("Habit not found: {}", id).into());
                }
                println!("Deleted habit {}", id);
                Ok(())
            }
        }
    }
}
