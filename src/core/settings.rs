//! Saved rename options
//!
//! The engine takes everything it needs as explicit parameters; this
//! module only remembers the options the user last ran with, persisted to
//! `<data_dir>/MP3 Shuffler/settings.json`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::scanning::DEFAULT_EXTENSIONS;

/// Last-used rename options
///
/// Loaded at startup to pre-fill defaults and rewritten after each
/// successful run. Unknown or missing fields fall back to defaults so old
/// settings files keep working.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenameSettings {
    /// Naming pattern with `{index}`/`{name}` placeholders
    #[serde(default = "default_pattern")]
    pub pattern: String,
    /// Use the sequential `<index> - <stem>` prefix instead of the pattern
    #[serde(default = "default_true")]
    pub use_sequential_prefix: bool,
    #[serde(default)]
    pub sanitize: bool,
    #[serde(default)]
    pub include_subfolders: bool,
    /// Redirect renamed files here instead of renaming in place
    #[serde(default)]
    pub output_folder: Option<PathBuf>,
    /// Extension filter applied during enumeration
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// When these settings were last saved (RFC3339)
    #[serde(default)]
    pub saved_at: Option<String>,
}

fn default_pattern() -> String {
    "{index} - {name}".to_string()
}

fn default_true() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

impl Default for RenameSettings {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            use_sequential_prefix: true,
            sanitize: false,
            include_subfolders: false,
            output_folder: None,
            extensions: default_extensions(),
            saved_at: None,
        }
    }
}

impl RenameSettings {
    const SETTINGS_FILE: &'static str = "settings.json";

    /// Get the app data directory (`<data_dir>/MP3 Shuffler/`)
    fn get_app_data_dir() -> Result<PathBuf, String> {
        let data_dir =
            dirs::data_dir().ok_or_else(|| "Could not determine data directory".to_string())?;

        let app_dir = data_dir.join("MP3 Shuffler");

        if !app_dir.exists() {
            std::fs::create_dir_all(&app_dir)
                .map_err(|e| format!("Failed to create app data directory: {}", e))?;
        }

        Ok(app_dir)
    }

    /// Load saved settings from disk, or return defaults if not found
    pub fn load() -> Self {
        match Self::get_app_data_dir()
            .map(|dir| dir.join(Self::SETTINGS_FILE))
            .and_then(|path| Self::read_from(&path))
        {
            Ok(settings) => {
                log::debug!("Loaded rename settings from disk");
                settings
            }
            Err(e) => {
                log::debug!("Using default rename settings: {}", e);
                Self::default()
            }
        }
    }

    /// Save these settings to disk, stamping `saved_at`
    pub fn save(&mut self) -> Result<(), String> {
        let app_dir = Self::get_app_data_dir()?;
        self.saved_at = Some(chrono::Utc::now().to_rfc3339());
        self.write_to(&app_dir.join(Self::SETTINGS_FILE))
    }

    fn read_from(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Err("Settings file not found".to_string());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings: {}", e))?;

        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse settings: {}", e))
    }

    fn write_to(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        std::fs::write(path, json).map_err(|e| format!("Failed to write settings: {}", e))?;

        log::debug!("Saved rename settings to {:?}", path);
        Ok(())
    }
}
