use chrono::Local;
use clap::Args;

use sevenk::storage::FileStore;
use sevenk::Workspace;

use super::{CommandResult, OutputFormat};

#[derive(Args)]
pub struct StatsCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl StatsCommand {
    pub fn run(&self, workspace: &Workspace<FileStore>) -> CommandResult {
        let stats = workspace.dashboard(&Local::now())?;

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            }
            OutputFormat::Text => {
                if let Some(name) = workspace.preferences().user_name()? {
                    println!("Welcome back, {}!\n", name);
                }
                println!("Dashboard");
                println!("=========\n");
                println!(
                    "Todos:            {}/{} done",
                    stats.todos_done, stats.todos_total
                );
                println!(
                    "Daily habits:     {}/{} done",
                    stats.daily_habits_done, stats.daily_habits_total
                );
                println!("Completion rate:  {}%", stats.completion_rate);
                println!();
                println!("Pending tasks:    {}", stats.pending_tasks);
                println!("Completed tasks:  {}", stats.completed_tasks);
                println!(
                    "Tracked habits:   {} ({} done today)",
                    stats.active_habits, stats.habits_done_today
                );
                println!("Journal entries:  {}", stats.journal_entries);
                println!("Avg quiz score:   {}%", stats.average_quiz_score);
            }
        }
        Ok(())
    }
}
