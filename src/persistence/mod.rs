pub mod codec;
pub mod files;
pub mod settings;
pub mod storage;

pub use codec::{decode_list, encode_list};
pub use files::{atomic_write, ensure_data_dir, init_local_data_dir, read_file};
pub use settings::{load_settings, save_settings, Settings};
pub use storage::{FileStorage, Storage};

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Get path to settings.json
pub fn settings_file(data_dir: &Path) -> PathBuf {
    data_dir.join("settings.json")
}

/// Get path to the log file
pub fn log_file(data_dir: &Path) -> PathBuf {
    data_dir.join("checkoff.log")
}

/// Load settings, writing the defaults out on first run so they can be edited
pub fn load_or_create_settings(data_dir: &Path) -> Result<Settings> {
    let path = settings_file(data_dir);
    let settings = load_settings(&path)?;
    if !path.exists() {
        save_settings(&path, &settings)?;
    }
    Ok(settings)
}
