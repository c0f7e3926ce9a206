use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use sevenk::timer::POMODORO_SECS;

const DATA_DIR_ENV: &str = "SEVENK_DATA_DIR";
const POMODORO_MINUTES_ENV: &str = "SEVENK_POMODORO_MINUTES";

/// Longest Pomodoro session accepted, one day.
pub const MAX_POMODORO_MINUTES: u32 = 24 * 60;

/// Notepad auto-save delay when the file does not set one.
const DEFAULT_AUTOSAVE_DELAY_MS: u64 = 2000;

/// Source of a configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Application configuration with source tracking
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Directory holding one file per stored collection
    pub data_dir: ConfigValue<PathBuf>,
    /// Length of a Pomodoro session
    pub pomodoro_minutes: ConfigValue<u32>,
    /// Optional YAML/JSON question bank replacing the built-in one
    pub question_bank: ConfigValue<Option<PathBuf>>,
    /// Idle time before the notepad editor saves
    pub autosave_delay_ms: ConfigValue<u64>,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

/// Internal struct for deserializing config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    data_dir: Option<PathBuf>,
    pomodoro_minutes: Option<u32>,
    question_bank: Option<PathBuf>,
    autosave_delay_ms: Option<u64>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::load_with_env(config_path, |name| std::env::var(name).ok())
    }

    fn load_with_env(
        config_path: Option<PathBuf>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut data_dir = ConfigValue::new(Self::default_data_dir(), ConfigSource::Default);
        let mut pomodoro_minutes = ConfigValue::new(POMODORO_SECS / 60, ConfigSource::Default);
        let mut question_bank = ConfigValue::new(None, ConfigSource::Default);
        let mut autosave_delay_ms =
            ConfigValue::new(DEFAULT_AUTOSAVE_DELAY_MS, ConfigSource::Default);
        let mut config_file = None;

        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            if let Some(dir) = file_config.data_dir {
                data_dir = ConfigValue::new(resolve(&path, dir), ConfigSource::File);
            }
            if let Some(minutes) = file_config.pomodoro_minutes {
                if !valid_minutes(minutes) {
                    return Err(ConfigError::InvalidValue(
                        path,
                        "pomodoro_minutes",
                        minutes.to_string(),
                    ));
                }
                pomodoro_minutes = ConfigValue::new(minutes, ConfigSource::File);
            }
            if let Some(bank) = file_config.question_bank {
                question_bank = ConfigValue::new(Some(resolve(&path, bank)), ConfigSource::File);
            }
            if let Some(delay) = file_config.autosave_delay_ms {
                autosave_delay_ms = ConfigValue::new(delay, ConfigSource::File);
            }

            config_file = Some(path);
        }

        if let Some(dir) = env(DATA_DIR_ENV) {
            data_dir = ConfigValue::new(PathBuf::from(dir), ConfigSource::Environment);
        }
        if let Some(minutes) = env(POMODORO_MINUTES_ENV) {
            let parsed = minutes
                .trim()
                .parse()
                .ok()
                .filter(|&m| valid_minutes(m))
                .ok_or_else(|| ConfigError::InvalidEnv(POMODORO_MINUTES_ENV, minutes.clone()))?;
            pomodoro_minutes = ConfigValue::new(parsed, ConfigSource::Environment);
        }

        Ok(Self {
            data_dir,
            pomodoro_minutes,
            question_bank,
            autosave_delay_ms,
            config_file,
        })
    }

    /// Default config directory (platform-specific):
    /// - Linux: ~/.config/sevenk/
    /// - macOS: ~/Library/Application Support/sevenk/
    /// - Windows: %APPDATA%/sevenk/
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sevenk")
    }

    /// Default data directory (platform-specific):
    /// - Linux: ~/.local/share/sevenk/
    /// - macOS: ~/Library/Application Support/sevenk/
    /// - Windows: %APPDATA%/sevenk/
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sevenk")
    }

    /// Default config file path (platform-specific config dir + config.yaml)
    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }
}

fn valid_minutes(minutes: u32) -> bool {
    (1..=MAX_POMODORO_MINUTES).contains(&minutes)
}

/// Relative paths in the config file are relative to the file's directory.
fn resolve(config_path: &Path, value: PathBuf) -> PathBuf {
    if value.is_relative() {
        config_path
            .parent()
            .map(|p| p.join(&value))
            .unwrap_or(value)
    } else {
        value
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
    InvalidEnv(&'static str, String),
    InvalidValue(PathBuf, &'static str, String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
            ConfigError::InvalidEnv(name, value) => {
                write!(f, "Invalid value '{}' for {}", value, name)
            }
            ConfigError::InvalidValue(path, key, value) => write!(
                f,
                "Invalid {} '{}' in config file '{}': expected 1 to {}",
                key,
                value,
                path.display(),
                MAX_POMODORO_MINUTES
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
