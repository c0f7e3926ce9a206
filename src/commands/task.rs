use chrono::NaiveDate;
use clap::{Args, Subcommand};

use sevenk::models::{Priority, TaskDraft};
use sevenk::storage::FileStore;
use sevenk::Workspace;

use super::{truncate, CommandResult, OutputFormat};

#[derive(Args)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub command: TaskSubcommand,
}

#[derive(Subcommand)]
pub enum TaskSubcommand {
    /// Add a task
    Add {
        /// Task title
        title: String,

        /// Longer description
        #[arg(long)]
        description: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,

        /// Priority: low, medium, high
        #[arg(long, short, default_value = "medium")]
        priority: Priority,

        /// Comma-separated tags
        #[arg(long, short)]
        tags: Option<String>,
    },

    /// List tasks, newest first
    List {
        /// Only tasks whose title or description contains this text
        #[arg(long, short)]
        search: Option<String>,

        /// Only tasks that are not done
        #[arg(long)]
        pending: bool,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Mark a task done, or not done
    Toggle {
        /// Task ID
        id: u64,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: u64,
    },
}

impl TaskCommand {
    pub fn run(&self, workspace: &Workspace<FileStore>) -> CommandResult {
        let repo = workspace.tasks();

        match &self.command {
            TaskSubcommand::Add {
                title,
                description,
                due,
                priority,
                tags,
            } => {
                let mut draft = TaskDraft::new(title.as_str()).with_priority(*priority);
                if let Some(description) = description {
                    draft = draft.with_description(description.as_str());
                }
                if let Some(due) = due {
                    draft = draft.with_due_date(*due);
                }
                if let Some(tags) = tags {
                    draft = draft.with_tags(tags.as_str());
                }

                let task = repo.add_task(draft)?;
                println!("Added task:");
                println!("{}", task);
                Ok(())
            }

            TaskSubcommand::List {
                search,
                pending,
                format,
            } => {
                let mut tasks = match search {
                    Some(query) => repo.search_tasks(query)?,
                    None => repo.load_all()?,
                };
                if *pending {
                    tasks.retain(|t| !t.completed);
                }

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&tasks)?);
                    }
                    OutputFormat::Text => {
                        if tasks.is_empty() {
                            println!("No tasks found");
                            return Ok(());
                        }
                        println!(
                            "{:<3}  {:<13}  {:<30}  {:<8}  {:<10}  TAGS",
                            "", "ID", "TITLE", "PRIORITY", "DUE"
                        );
                        println!("{}", "-".repeat(90));
                        for task in &tasks {
                            let due = task.due_date.map(|d| d.to_string()).unwrap_or_default();
                            println!(
                                "[{}]  {:<13}  {:<30}  {:<8}  {:<10}  {}",
                                if task.completed { "x" } else { " " },
                                task.id,
                                truncate(&task.title, 30),
                                task.priority,
                                due,
                                task.tags.join(", ")
                            );
                        }
                        println!("\nTotal: {} task(s)", tasks.len());
                    }
                }
                Ok(())
            }

            TaskSubcommand::Toggle { id } => match repo.toggle_task(*id)? {
                Some(task) => {
                    println!("{}", task);
                    Ok(())
                }
                None => Err(format!("Task not found: {}", id).into()),
            },

            TaskSubcommand::Delete { id } => {
                if !repo.delete(*id)? {
                    return Err(format!("Task not found: {}", id).into());
                }
                println!("Deleted task {}", id);
                Ok(())
            }
        }
    }
}
