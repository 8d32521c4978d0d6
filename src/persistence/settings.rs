use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User settings stored in settings.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Name of the slot the list is kept under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Show the keybinding hint bar
    #[serde(default = "default_show_hints")]
    pub show_hints: bool,
}

fn default_storage_key() -> String {
    "todos".to_string()
}

fn default_show_hints() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            show_hints: default_show_hints(),
        }
    }
}

/// Load settings from settings.json, defaults if the file doesn't exist
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();

    let Some(content) = super::read_file(path)? else {
        return Ok(Settings::default());
    };

    serde_json::from_str(&content)
        .with_context(|| format!("Invalid settings file: {}", path.display()))
}

/// Save settings to settings.json
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    super::atomic_write(path, &json)?;
    Ok(())
}
