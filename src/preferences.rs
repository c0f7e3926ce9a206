//! Single-value slots: dark mode, display name, notepad text and settings.

use crate::error::{Error, Result};
use crate::models::Settings;
use crate::storage::{KeyValueStore, StoreKey};

#[derive(Debug, Clone)]
pub struct Preferences<S> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Off unless the slot holds exactly `"true"`.
    pub fn dark_mode(&self) -> Result<bool> {
        Ok(self.store.read(StoreKey::DarkMode)?.as_deref() == Some("true"))
    }

    pub fn set_dark_mode(&self, enabled: bool) -> Result<()> {
        let value = if enabled { "true" } else { "false" };
        self.store.write(StoreKey::DarkMode, value)?;
        Ok(())
    }

    /// The stored display name; `None` when unset or blank.
    pub fn user_name(&self) -> Result<Option<String>> {
        Ok(self
            .store
            .read(StoreKey::UserName)?
            .filter(|name| !name.trim().is_empty()))
    }

    pub fn set_user_name(&self, name: &str) -> Result<()> {
        self.store.write(StoreKey::UserName, name.trim())?;
        Ok(())
    }

    pub fn notepad(&self) -> Result<String> {
        Ok(self.store.read(StoreKey::Notepad)?.unwrap_or_default())
    }

    pub fn set_notepad(&self, content: &str) -> Result<()> {
        self.store.write(StoreKey::Notepad, content)?;
        tracing::debug!("Saved notepad ({} bytes)", content.len());
        Ok(())
    }

    /// Stored settings, or the defaults when missing or malformed.
    pub fn settings(&self) -> Result<Settings> {
        let Some(raw) = self.store.read(StoreKey::Settings)? else {
            return Ok(Settings::default());
        };

        match serde_json::from_str(&raw) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!("Ignoring malformed data in {}: {}", StoreKey::Settings, e);
                Ok(Settings::default())
            }
        }
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        let json = serde_json::to_string(settings).map_err(|source| Error::Serialize {
            key: StoreKey::Settings,
            source,
        })?;
        self.store.write(StoreKey::Settings, &json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Theme;
    use crate::storage::MemoryStore;

    fn prefs() -> (Preferences<MemoryStore>, MemoryStore) {
        let store = MemoryStore::new();
        (Preferences::new(store.clone()), store)
    }

    #[test]
    fn test_dark_mode() {
        let (prefs, store) = prefs();
        assert!(!prefs.dark_mode().unwrap());

        prefs.set_dark_mode(true).unwrap();
        assert!(prefs.dark_mode().unwrap());
        assert_eq!(store.read(StoreKey::DarkMode).unwrap().as_deref(), Some("true"));

        store.write(StoreKey::DarkMode, "yes please").unwrap();
        assert!(!prefs.dark_mode().unwrap());
    }

    #[test]
    fn test_user_name() {
        let (prefs, _) = prefs();
        assert_eq!(prefs.user_name().unwrap(), None);

        prefs.set_user_name("  Asha ").unwrap();
        assert_eq!(prefs.user_name().unwrap().as_deref(), Some("Asha"));

        prefs.set_user_name("").unwrap();
        assert_eq!(prefs.user_name().unwrap(), None);
    }

    #[test]
    fn test_notepad_is_stored_verbatim() {
        let (prefs, _) = prefs();
        assert_eq!(prefs.notepad().unwrap(), "");

        prefs.set_notepad("line one\n  line two\n").unwrap();
        assert_eq!(prefs.notepad().unwrap(), "line one\n  line two\n");
    }

    #[test]
    fn test_settings_default_and_roundtrip() {
        let (prefs, store) = prefs();
        assert_eq!(prefs.settings().unwrap(), Settings::default());

        let mut settings = Settings::default();
        settings.theme = Theme::Dark;
        prefs.save_settings(&settings).unwrap();
        assert_eq!(prefs.settings().unwrap(), settings);

        store.write(StoreKey::Settings, "[1,2,3]").unwrap();
        assert_eq!(prefs.settings().unwrap(), Settings::default());
    }
}
