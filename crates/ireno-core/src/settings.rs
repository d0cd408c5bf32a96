//! User settings, persisted as a single JSON blob.
//!
//! Loads from ${IRENO_HOME}/settings.json with sensible defaults. A
//! missing or malformed file is never an error: loading always produces
//! a fully populated `Settings`, falling back field-by-field to the
//! defaults. Persistence failures are logged and swallowed; settings
//! stay live in memory for the rest of the session either way.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow the terminal's own colors (default)
    #[default]
    Auto,
    Light,
    Dark,
}

impl Theme {
    /// Returns the short display name for this theme.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Auto => "auto",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns the next theme in the auto → light → dark cycle.
    pub fn next(&self) -> Theme {
        match self {
            Theme::Auto => Theme::Light,
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Auto,
        }
    }

    /// Returns all themes for iteration (e.g., in the settings modal).
    pub fn all() -> &'static [Theme] {
        &[Theme::Auto, Theme::Light, Theme::Dark]
    }
}

pub mod paths {
    //! Path resolution for IRENO configuration and data directories.
    //!
    //! IRENO_HOME resolution order:
    //! 1. IRENO_HOME environment variable (if set)
    //! 2. ~/.config/ireno (default)

    use std::path::PathBuf;

    /// Returns the IRENO home directory.
    ///
    /// Checks IRENO_HOME env var first, falls back to ~/.config/ireno
    pub fn ireno_home() -> PathBuf {
        if let Ok(home) = std::env::var("IRENO_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("ireno"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the settings.json file.
    pub fn settings_path() -> PathBuf {
        ireno_home().join("settings.json")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        ireno_home().join("logs")
    }
}

/// User preferences for the dashboard session.
///
/// Serialized with camelCase keys; the on-disk blob is
/// `{"theme": ..., "alertNotifications": ..., "systemNotifications": ...,
/// "refreshInterval": ...}`. Unknown keys are ignored and missing keys
/// take their defaults, so older or hand-edited blobs keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Color scheme preference.
    pub theme: Theme,

    /// Whether alert-related notifications are shown.
    pub alert_notifications: bool,

    /// Whether general system notifications are shown.
    pub system_notifications: bool,

    /// Dashboard metrics refresh interval in seconds.
    pub refresh_interval: u32,
}

impl Settings {
    const DEFAULT_REFRESH_INTERVAL_SECS: u32 = 60;

    /// Loads settings from the default settings path.
    pub fn load() -> Self {
        Self::load_from(&paths::settings_path())
    }

    /// Loads settings from a specific path.
    ///
    /// A missing file yields the defaults. An unreadable or malformed
    /// file also yields the defaults, with a warning logged; corrupted
    /// preferences are not worth failing startup over.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Settings::default();
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("failed to read settings from {}: {e}", path.display());
                return Settings::default();
            }
        };

        let mut settings: Settings = match serde_json::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("failed to parse settings from {}: {e}", path.display());
                return Settings::default();
            }
        };

        // refresh_interval must stay a positive integer
        settings.refresh_interval = settings.refresh_interval.max(1);
        settings
    }

    /// Saves settings to the default settings path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&paths::settings_path())
    }

    /// Saves settings to a specific path.
    ///
    /// Uses atomic write (temp file + rename) to prevent corruption.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize settings")?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, contents)
            .with_context(|| format!("Failed to write settings to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            alert_notifications: true,
            system_notifications: true,
            refresh_interval: Self::DEFAULT_REFRESH_INTERVAL_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Auto);
        assert!(settings.alert_notifications);
        assert!(settings.system_notifications);
        assert_eq!(settings.refresh_interval, 60);
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_corrupted_blob_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json at all").unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_backfills_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.theme, Theme::Dark);
        assert!(settings.alert_notifications);
        assert!(settings.system_notifications);
        assert_eq!(settings.refresh_interval, 60);
    }

    #[test]
    fn test_load_ignores_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"theme":"light","legacyField":true,"refreshInterval":120}"#,
        )
        .unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.refresh_interval, 120);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = Settings {
            theme: Theme::Dark,
            alert_notifications: false,
            system_notifications: true,
            refresh_interval: 30,
        };
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn test_save_uses_camel_case_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        Settings::default().save_to(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("alertNotifications"));
        assert!(contents.contains("systemNotifications"));
        assert!(contents.contains("refreshInterval"));
        assert!(contents.contains(r#""theme": "auto""#));
    }

    #[test]
    fn test_load_clamps_refresh_interval() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"refreshInterval":0}"#).unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.refresh_interval, 1);
    }
}
