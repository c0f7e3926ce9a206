use clap::ValueEnum;

mod backup;
mod config_cmd;
mod event;
mod habit;
mod journal;
mod notepad;
mod quiz;
mod routine;
mod settings;
mod stats;
mod task;
mod timer;
mod todo;

pub use backup::{ExportCommand, ImportCommand};
pub use config_cmd::ConfigCommand;
pub use event::EventCommand;
pub use habit::HabitCommand;
pub use journal::JournalCommand;
pub use notepad::NotepadCommand;
pub use quiz::QuizCommand;
pub use routine::RoutineCommand;
pub use settings::SettingsCommand;
pub use stats::StatsCommand;
pub use task::TaskCommand;
pub use timer::TimerCommand;
pub use todo::TodoCommand;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Shortens `text` to `width` characters, marking the cut with "...".
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}
