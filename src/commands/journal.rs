use clap::{Args, Subcommand};
use std::io::{self, Read};

use sevenk::models::{JournalDraft, Mood};
use sevenk::storage::FileStore;
use sevenk::Workspace;

use super::{truncate, CommandResult, OutputFormat};

#[derive(Args)]
pub struct JournalCommand {
    #[command(subcommand)]
    pub command: JournalSubcommand,
}

#[derive(Subcommand)]
pub enum JournalSubcommand {
    /// Write a journal entry
    Add {
        /// Entry title
        title: String,

        /// Entry text (read from stdin when omitted)
        #[arg(long)]
        content: Option<String>,

        /// Mood: happy, sad, excited, neutral, anxious, grateful
        #[arg(long, short, default_value = "neutral")]
        mood: Mood,

        /// Comma-separated tags
        #[arg(long, short)]
        tags: Option<String>,
    },

    /// List journal entries, newest first
    List {
        /// Only entries whose title or content contains this text
        #[arg(long, short)]
        search: Option<String>,

        /// Print whole entries instead of a summary table
        #[arg(long)]
        full: bool,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Delete a journal entry
    Delete {
        /// Entry ID
        id: u64,
    },
}

impl JournalCommand {
    pub fn run(&self, workspace: &Workspace<FileStore>) -> CommandResult {
        let repo = workspace.journal();

        match &self.command {
            JournalSubcommand::Add {
                title,
                content,
                mood,
                tags,
            } => {
                let content = match content {
                    Some(content) => content.clone(),
                    None => {
                        let mut buffer = String::new();
                        io::stdin().read_to_string(&mut buffer)?;
                        buffer
                    }
                };

                let mut draft = JournalDraft::new(title.as_str(), content).with_mood(*mood);
                if let Some(tags) = tags {
                    draft = draft.with_tags(tags.as_str());
                }

                let entry = repo.add_journal_entry(draft)?;
                println!(
                    "Saved journal entry {} ({} words)",
                    entry.id, entry.word_count
                );
                Ok(())
            }

            JournalSubcommand::List {
                search,
                full,
                format,
            } => {
                let entries = match search {
                    Some(query) => repo.search_journal(query)?,
                    None => repo.load_all()?,
                };

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&entries)?);
                    }
                    OutputFormat::Text if *full => {
                        for entry in &entries {
                            println!("[{}] {}", entry.id, entry);
                        }
                    }
                    OutputFormat::Text => {
                        if entries.is_empty() {
                            println!("No journal entries found");
                            return Ok(());
                        }
                        println!(
                            "{:<13}  {:<16}  {:<8}  {:<30}  WORDS",
                            "ID", "WRITTEN", "MOOD", "TITLE"
                        );
                        println!("{}", "-".repeat(80));
                        for entry in &entries {
                            println!(
                                "{:<13}  {:<16}  {:<8}  {:<30}  {}",
                                entry.id,
                                entry.created_at.format("%Y-%m-%d %H:%M").to_string(),
                                entry.mood.to_string(),
                                truncate(&entry.title, 30),
                                entry.word_count
                            );
                        }
                        println!("\nTotal: {} entry(ies)", entries.len());
                    }
                }
                Ok(())
            }

            JournalSubcommand::Delete { id } => {
                if !repo.delete(*id)? {
                    return Err(format!("Journal entry not found: {}", id).into());
                }
                println!("Deleted journal entry {}", id);
                Ok(())
            }
        }
    }
}
