use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
            Theme::System => write!(f, "system"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            _ => Err(format!(
                "Invalid theme '{}'. Valid options: light, dark, system",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSize::Small => write!(f, "small"),
            FontSize::Medium => write!(f, "medium"),
            FontSize::Large => write!(f, "large"),
        }
    }
}

impl FromStr for FontSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" => Ok(FontSize::Small),
            "medium" => Ok(FontSize::Medium),
            "large" => Ok(FontSize::Large),
            _ => Err(format!(
                "Invalid font size '{}'. Valid options: small, medium, large",
                s
            )),
        }
    }
}

/// Application settings bundle, stored as one JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub theme: Theme,
    pub notifications: bool,
    pub auto_save: bool,
    pub api_key: String,
    pub font_size: FontSize,
    pub timezone: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            notifications: true,
            auto_save: true,
            api_key: String::new(),
            font_size: FontSize::Medium,
            timezone: "UTC".to_string(),
        }
    }
}

impl Settings {
    /// Sets one field from its camelCase or snake_case name.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "theme" => self.theme = value.parse()?,
            "notifications" => self.notifications = parse_bool(value)?,
            "autoSave" | "auto_save" => self.auto_save = parse_bool(value)?,
            "apiKey" | "api_key" => self.api_key = value.to_string(),
            "fontSize" | "font_size" => self.font_size = value.parse()?,
            "timezone" => self.timezone = value.to_string(),
            _ => {
                return Err(format!(
                    "Unknown setting '{}'. Valid keys: theme, notifications, autoSave, apiKey, fontSize, timezone",
                    key
                ))
            }
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value.to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(format!("Expected true or false, got '{}'", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Light);
        assert!(settings.notifications);
        assert!(settings.auto_save);
        assert!(settings.api_key.is_empty());
        assert_eq!(settings.font_size, FontSize::Medium);
        assert_eq!(settings.timezone, "UTC");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert!(settings.auto_save);
        assert_eq!(settings.timezone, "UTC");
    }

    #[test]
    fn test_set_fields() {
        let mut settings = Settings::default();
        settings.set("autoSave", "off").unwrap();
        settings.set("font_size", "large").unwrap();
        settings.set("timezone", "Asia/Kolkata").unwrap();

        assert!(!settings.auto_save);
        assert_eq!(settings.font_size, FontSize::Large);
        assert_eq!(settings.timezone, "Asia/Kolkata");
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut settings = Settings::default();
        assert!(settings.set("colour", "red").is_err());
        assert!(settings.set("notifications", "maybe").is_err());
        assert!(settings.set("theme", "neon").is_err());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_settings_json_keys() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["autoSave"], true);
        assert_eq!(json["fontSize"], "medium");
        assert_eq!(json["apiKey"], "");
    }
}
