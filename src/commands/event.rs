use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};

use sevenk::storage::FileStore;
use sevenk::Workspace;

use super::{truncate, CommandResult, OutputFormat};

#[derive(Args)]
pub struct EventCommand {
    #[command(subcommand)]
    pub command: EventSubcommand,
}

#[derive(Subcommand)]
pub enum EventSubcommand {
    /// Add a calendar event
    Add {
        /// Event title
        title: String,

        /// Date (YYYY-MM-DD, default: today)
        #[arg(long, short)]
        date: Option<NaiveDate>,

        /// Optional description
        #[arg(long)]
        description: Option<String>,
    },

    /// List events, newest first
    List {
        /// Only events on this date (YYYY-MM-DD)
        #[arg(long, short)]
        date: Option<NaiveDate>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Change an event
    Edit {
        /// Event ID
        id: u64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// New description (empty to clear)
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an event
    Delete {
        /// Event ID
        id: u64,
    },
}

impl EventCommand {
    pub fn run(&self, workspace: &Workspace<FileStore>) -> CommandResult {
        let repo = workspace.events();

        match &self.command {
            EventSubcommand::Add {
                title,
                date,
                description,
            } => {
                let date = date.unwrap_or_else(|| Local::now().date_naive());
                let event = repo.add_event(title, date, description.as_deref())?;
                println!("Added event:");
                println!("{}", event);
                Ok(())
            }

            EventSubcommand::List { date, format } => {
                let events = match date {
                    Some(date) => repo.events_on(*date)?,
                    None => repo.load_all()?,
                };

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&events)?);
                    }
                    OutputFormat::Text => {
                        if events.is_empty() {
                            println!("No events found");
                            return Ok(());
                        }
                        println!("{:<6}  {:<10}  {:<30}  DESCRIPTION", "ID", "DATE", "TITLE");
                        println!("{}", "-".repeat(80));
                        for event in &events {
                            println!(
                                "{:<6}  {:<10}  {:<30}  {}",
                                event.id,
                                event.date,
                                truncate(&event.title, 30),
                                event.description.as_deref().unwrap_or("")
                            );
                        }
                        println!("\nTotal: {} event(s)", events.len());
                    }
                }
                Ok(())
            }

            EventSubcommand::Edit {
                id,
                title,
                date,
                description,
            } => {
                if title.is_none() && date.is_none() && description.is_none() {
                    return Err("Nothing to update. Provide at least one option.".into());
                }
                if title.as_deref().is_some_and(|t| t.trim().is_empty()) {
                    return Err("Event title is required".into());
                }

                let updated = repo.modify(*id, |event| {
                    if let Some(title) = title {
                        event.title = title.trim().to_string();
                    }
                    if let Some(date) = date {
                        event.date = *date;
                    }
                    if let Some(description) = description {
                        let description = description.trim();
                        event.description =
                            (!description.is_empty()).then(|| description.to_string());
                    }
                })?;

                match updated {
                    Some(event) => {
                        println!("Updated event:");
                        println!("{}", event);
                        Ok(())
                    }
                    None => Err(format!("Event not found: {}", id).into()),
                }
            }

            EventSubcommand::Delete { id } => {
                if !repo.delete(*id)? {
                    return Err(format!("Event not found: {}", id).into());
                }
                println!("Deleted event {}", id);
                Ok(())
            }
        }
    }
}
