use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;

use commands::{
    ConfigCommand, EventCommand, ExportCommand, HabitCommand, ImportCommand, JournalCommand,
    NotepadCommand, QuizCommand, RoutineCommand, SettingsCommand, StatsCommand, TaskCommand,
    TimerCommand, TodoCommand,
};
use config::Config;
use sevenk::quotes::random_quote;
use sevenk::Workspace;

#[derive(Parser)]
#[command(name = "sevenk")]
#[command(version)]
#[command(about = "Todos, habits, journal, study quizzes and a focus timer", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage todos
    Todo(TodoCommand),

    /// Manage daily habits
    Habit(HabitCommand),

    /// Manage calendar events
    Event(EventCommand),

    /// Manage tasks
    Task(TaskCommand),

    /// Manage tracked habits
    Routine(RoutineCommand),

    /// Write and read the journal
    Journal(JournalCommand),

    /// Read and write the notepad
    Notepad(NotepadCommand),

    /// Study quizzes
    Quiz(QuizCommand),

    /// Show the dashboard
    Stats(StatsCommand),

    /// Pomodoro timer
    Timer(TimerCommand),

    /// Settings and preferences
    Settings(SettingsCommand),

    /// Export all data to a JSON backup
    Export(ExportCommand),

    /// Replace all data with a JSON backup
    Import(ImportCommand),

    /// Print a motivational quote
    Quote,

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "sevenk=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config)?;
    let workspace = Workspace::open(config.data_dir.value.clone());
    tracing::debug!("Using data directory {}", config.data_dir.value.display());

    match cli.command {
        Some(Commands::Todo(cmd)) => cmd.run(&workspace),
        Some(Commands::Habit(cmd)) => cmd.run(&workspace),
        Some(Commands::Event(cmd)) => cmd.run(&workspace),
        Some(Commands::Task(cmd)) => cmd.run(&workspace),
        Some(Commands::Routine(cmd)) => cmd.run(&workspace),
        Some(Commands::Journal(cmd)) => cmd.run(&workspace),
        Some(Commands::Notepad(cmd)) => cmd.run(&workspace, &config),
        Some(Commands::Quiz(cmd)) => cmd.run(&workspace, &config),
        Some(Commands::Stats(cmd)) => cmd.run(&workspace),
        Some(Commands::Timer(cmd)) => cmd.run(&config),
        Some(Commands::Settings(cmd)) => cmd.run(&workspace),
        Some(Commands::Export(cmd)) => cmd.run(&workspace),
        Some(Commands::Import(cmd)) => cmd.run(&workspace),
        Some(Commands::Quote) => {
            println!("{}", random_quote());
            Ok(())
        }
        Some(Commands::Config(cmd)) => cmd.run(&config),
        None => {
            println!("Use --help to see available commands");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["sevenk", "todo", "add", "Buy milk"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Todo(_))));

        let cli = Cli::try_parse_from([
            "sevenk", "task", "add", "Ship it", "--priority", "high", "--tags", "work,urgent",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Task(_))));

        assert!(Cli::try_parse_from(["sevenk", "task", "add", "x", "--priority", "urgent"]).is_err());
        assert!(Cli::try_parse_from(["sevenk", "quiz", "start", "english", "-d", "impossible"]).is_err());
    }

    #[test]
    fn test_timer_minutes_bounds() {
        assert!(Cli::try_parse_from(["sevenk", "timer", "start", "--minutes", "50"]).is_ok());
        assert!(Cli::try_parse_from(["sevenk", "timer", "start", "--minutes", "0"]).is_err());
        assert!(Cli::try_parse_from(["sevenk", "timer", "start", "--minutes", "80000000"]).is_err());
    }
}
