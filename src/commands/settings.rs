use clap::{Args, Subcommand, ValueEnum};

use sevenk::storage::FileStore;
use sevenk::Workspace;

use super::{CommandResult, OutputFormat};

#[derive(Clone, Copy, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

#[derive(Args)]
pub struct SettingsCommand {
    #[command(subcommand)]
    pub command: SettingsSubcommand,
}

#[derive(Subcommand)]
pub enum SettingsSubcommand {
    /// Show settings and preferences
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Change one setting
    Set {
        /// theme, notifications, autoSave, apiKey, fontSize or timezone
        key: String,

        /// New value
        value: String,
    },

    /// Turn dark mode on or off
    DarkMode {
        #[arg(value_enum)]
        state: Toggle,
    },

    /// Set the name shown on the dashboard (omit to clear)
    Name { name: Option<String> },
}

impl SettingsCommand {
    pub fn run(&self, workspace: &Workspace<FileStore>) -> CommandResult {
        let prefs = workspace.preferences();

        match &self.command {
            SettingsSubcommand::Show { format } => {
                let settings = prefs.settings()?;
                let dark_mode = prefs.dark_mode()?;
                let user_name = prefs.user_name()?;

                match format {
                    OutputFormat::Json => {
                        let value = serde_json::json!({
                            "settings": settings,
                            "darkMode": dark_mode,
                            "userName": user_name,
                        });
                        println!("{}", serde_json::to_string_pretty(&value)?);
                    }
                    OutputFormat::Text => {
                        println!("Settings");
                        println!("========\n");
                        println!("theme:          {}", settings.theme);
                        println!("notifications:  {}", settings.notifications);
                        println!("autoSave:       {}", settings.auto_save);
                        println!(
                            "apiKey:         {}",
                            if settings.api_key.is_empty() { "(not set)" } else { "********" }
                        );
                        println!("fontSize:       {}", settings.font_size);
                        println!("timezone:       {}", settings.timezone);
                        println!();
                        println!("dark mode:      {}", if dark_mode { "on" } else { "off" });
                        println!("name:           {}", user_name.as_deref().unwrap_or("(not set)"));
                    }
                }
                Ok(())
            }

            SettingsSubcommand::Set { key, value } => {
                let mut settings = prefs.settings()?;
                settings.set(key, value)?;
                prefs.save_settings(&settings)?;
                println!("Set {} = {}", key, value);
                Ok(())
            }

            SettingsSubcommand::DarkMode { state } => {
                let enabled = matches!(state, Toggle::On);
                prefs.set_dark_mode(enabled)?;
                println!("Dark mode {}", if enabled { "on" } else { "off" });
                Ok(())
            }

            SettingsSubcommand::Name { name } => {
                let name = name.as_deref().unwrap_or("");
                prefs.set_user_name(name)?;
                match prefs.user_name()? {
                    Some(name) => println!("Name set to {}", name),
                    None => println!("Name cleared"),
                }
                Ok(())
            }
        }
    }
}
