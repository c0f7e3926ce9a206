use chrono::{Local, Utc};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use sevenk::backup::default_file_name;
use sevenk::storage::FileStore;
use sevenk::Workspace;

use super::CommandResult;

#[derive(Args)]
pub struct ExportCommand {
    /// Output file (default: sevenk-backup-<date>.json in the current directory)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Print the backup instead of writing a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,
}

impl ExportCommand {
    pub fn run(&self, workspace: &Workspace<FileStore>) -> CommandResult {
        let json = workspace.export(Utc::now())?.to_json()?;

        if self.stdout {
            println!("{}", json);
            return Ok(());
        }

        let path = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(default_file_name(Local::now().date_naive())));
        fs::write(&path, json)?;
        println!("Exported data to {}", path.display());
        Ok(())
    }
}

#[derive(Args)]
pub struct ImportCommand {
    /// Backup file written by `sevenk export`
    file: PathBuf,
}

impl ImportCommand {
    pub fn run(&self, workspace: &Workspace<FileStore>) -> CommandResult {
        let json = fs::read_to_string(&self.file)?;
        let backup = workspace.import_json(&json)?;
        println!(
            "Imported {} todo(s), {} task(s), {} journal entry(ies) from {}",
            backup.todos.len(),
            backup.tasks.len(),
            backup.journal_entries.len(),
            self.file.display()
        );
        Ok(())
    }
}
