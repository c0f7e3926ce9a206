use clap::{Args, Subcommand};

use sevenk::models::Todo;
use sevenk::stats::{completed_count, total_count};
use sevenk::storage::FileStore;
use sevenk::Workspace;

use super::{CommandResult, OutputFormat};

#[derive(Args)]
pub struct TodoCommand {
    #[command(subcommand)]
    pub command: TodoSubcommand,
}

#[derive(Subcommand)]
pub enum TodoSubcommand {
    /// Add a todo
    Add {
        /// What needs doing
        text: String,
    },

    /// List todos, newest first
    List {
        /// Only show todos that are not done
        #[arg(long)]
        pending: bool,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Mark a todo done, or not done
    Toggle {
        /// Todo ID
        id: u64,
    },

    /// Change a todo's text
    Edit {
        /// Todo ID
        id: u64,

        /// New text
        text: String,
    },

    /// Delete a todo
    Delete {
        /// Todo ID
        id: u64,
    },
}

impl TodoCommand {
    pub fn run(&self, workspace: &Workspace<FileStore>) -> CommandResult {
        let repo = workspace.todos();

        match &self.command {
            TodoSubcommand::Add { text } => {
                let todo = repo.add_todo(text)?;
                println!("Added todo {}: {}", todo.id, todo.text);
                Ok(())
            }

            TodoSubcommand::List { pending, format } => {
                let mut todos = repo.load_all()?;
                let summary = todo_summary(&todos);
                if *pending {
                    todos.retain(|t| !t.completed);
                }

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&todos)?);
                    }
                    OutputFormat::Text => {
                        if todos.is_empty() {
                            println!("No todos found");
                            return Ok(());
                        }
                        for todo in &todos {
                            println!("{}", todo);
                        }
                        println!("\n{}", summary);
                    }
                }
                Ok(())
            }

            TodoSubcommand::Toggle { id } => match repo.toggle_todo(*id)? {
                Some(todo) => {
                    println!("{}", todo);
                    Ok(())
                }
                None => Err(format!("Todo not found: {}", id).into()),
            },

            TodoSubcommand::Edit { id, text } => match repo.edit_todo(*id, text)? {
                Some(todo) => {
                    println!("Updated todo:");
                    println!("{}", todo);
                    Ok(())
                }
                None => Err(format!("Todo not found: {}", id).into()),
            },

            TodoSubcommand::Delete { id } => {
                if !repo.delete(*id)? {
                    return Err(format!("Todo not found: {}", id).into());
                }
                println!("Deleted todo {}", id);
                Ok(())
            }
        }
    }
}

/// "N of M done" over the whole collection.
fn todo_summary(todos: &[Todo]) -> String {
    format!("{} of {} done", completed_count(todos), total_count(todos))
}
