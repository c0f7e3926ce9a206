use clap::{Args, Subcommand};
use std::fs;

use super::{CommandResult, OutputFormat};
use crate::config::Config;

const DEFAULT_CONFIG: &str = r#"# sevenk configuration

# Directory holding the stored data (default: platform data dir + /sevenk)
# data_dir: ~/.local/share/sevenk

# Pomodoro length in minutes
pomodoro_minutes: 25

# Notepad auto-save delay in milliseconds
autosave_delay_ms: 2000

# YAML or JSON question bank replacing the built-in questions
# question_bank: questions.yaml
"#;

#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show current configuration values
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Initialize configuration file
    Init,
}

impl ConfigCommand {
    pub fn run(&self, config: &Config) -> CommandResult {
        match &self.command {
            ConfigSubcommand::Show { format } => {
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(config)?);
                    }
                    OutputFormat::Text => {
                        println!("Configuration");
                        println!("=============\n");

                        match &config.config_file {
                            Some(path) => println!("Config file: {}", path.display()),
                            None => println!(
                                "Config file: {} (not found)",
                                Config::default_config_path().display()
                            ),
                        }
                        println!();

                        println!("data_dir: {}", config.data_dir.value.display());
                        println!("  source: {}", config.data_dir.source);
                        println!("pomodoro_minutes: {}", config.pomodoro_minutes.value);
                        println!("  source: {}", config.pomodoro_minutes.source);
                        println!("autosave_delay_ms: {}", config.autosave_delay_ms.value);
                        println!("  source: {}", config.autosave_delay_ms.source);
                        match &config.question_bank.value {
                            Some(path) => println!("question_bank: {}", path.display()),
                            None => println!("question_bank: (built-in)"),
                        }
                        println!("  source: {}", config.question_bank.source);
                    }
                }
                Ok(())
            }

            ConfigSubcommand::Init => {
                let config_path = Config::default_config_path();

                if config_path.exists() {
                    println!("Config file already exists: {}", config_path.display());
                    println!("Use 'sevenk config show' to view current configuration.");
                    return Ok(());
                }

                if let Some(parent) = config_path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&config_path, DEFAULT_CONFIG)?;

                println!("Created config file: {}", config_path.display());
                println!("\nEdit this file to customize your settings.");
                Ok(())
            }
        }
    }
}
