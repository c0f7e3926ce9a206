use clap::{Args, Subcommand};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

use sevenk::models::word_count;
use sevenk::storage::FileStore;
use sevenk::timer::Debouncer;
use sevenk::Workspace;

use super::CommandResult;
use crate::config::Config;

#[derive(Args)]
pub struct NotepadCommand {
    #[command(subcommand)]
    pub command: NotepadSubcommand,
}

#[derive(Subcommand)]
pub enum NotepadSubcommand {
    /// Print the notepad
    Show,

    /// Replace the notepad text
    Set {
        /// New text
        text: String,
    },

    /// Type into the notepad line by line until end of input
    ///
    /// With auto-save on, the text is saved once typing pauses.
    Edit {
        /// Keep the existing text and add to it
        #[arg(long, short)]
        append: bool,
    },
}

impl NotepadCommand {
    pub fn run(&self, workspace: &Workspace<FileStore>, config: &Config) -> CommandResult {
        let prefs = workspace.preferences();

        match &self.command {
            NotepadSubcommand::Show => {
                let content = prefs.notepad()?;
                if content.is_empty() {
                    println!("Notepad is empty");
                } else {
                    print!("{}", content);
                    if !content.ends_with('\n') {
                        println!();
                    }
                }
                Ok(())
            }

            NotepadSubcommand::Set { text } => {
                prefs.set_notepad(text)?;
                println!("Saved notepad ({} words)", word_count(text));
                Ok(())
            }

            NotepadSubcommand::Edit { append } => {
                let auto_save = prefs.settings()?.auto_save;
                let delay = Duration::from_millis(config.autosave_delay_ms.value);
                let initial = if *append { prefs.notepad()? } else { String::new() };

                let runtime = tokio::runtime::Runtime::new()?;
                let content = runtime.block_on(async {
                    let mut content = initial;
                    let mut debouncer = Debouncer::new(delay);
                    let mut lines = BufReader::new(tokio::io::stdin()).lines();

                    while let Some(line) = lines.next_line().await? {
                        content.push_str(&line);
                        content.push('\n');

                        if auto_save {
                            let prefs = prefs.clone();
                            let snapshot = content.clone();
                            debouncer.schedule(move || match prefs.set_notepad(&snapshot) {
                                Ok(()) => tracing::info!("Auto-saved notepad"),
                                Err(e) => tracing::error!("Failed to auto-save notepad: {}", e),
                            });
                        }
                    }

                    debouncer.cancel();
                    Ok::<_, std::io::Error>(content)
                })?;

                prefs.set_notepad(&content)?;
                println!("Saved notepad ({} words)", word_count(&content));
                Ok(())
            }
        }
    }
}
