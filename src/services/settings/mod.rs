use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::TimelineSettings;

const SETTINGS_FILE: &str = "timeline.toml";

/// Where settings live when no explicit path is given.
pub fn default_settings_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("com", "RustTimeline", "Timeline") {
        dirs.config_dir().join(SETTINGS_FILE)
    } else {
        log::warn!("Unable to resolve project directory; using current dir for settings");
        PathBuf::from(SETTINGS_FILE)
    }
}

/// Load settings from `path`, falling back to defaults when the file is absent.
pub fn load_settings(path: &Path) -> Result<TimelineSettings> {
    if !path.exists() {
        log::info!("No settings at {}; using defaults", path.display());
        return Ok(TimelineSettings::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings from {}", path.display()))?;
    let settings: TimelineSettings = toml::from_str(&data)
        .with_context(|| format!("failed to parse settings from {}", path.display()))?;
    settings
        .validate()
        .map_err(|e| anyhow!("Invalid settings in {}: {}", path.display(), e))?;

    log::info!("Loaded settings from {}", path.display());
    Ok(settings)
}

pub fn save_settings(path: &Path, settings: &TimelineSettings) -> Result<()> {
    settings
        .validate()
        .map_err(|e| anyhow!("Invalid settings: {}", e))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
    fs::write(path, data)
        .with_context(|| format!("failed to write settings to {}", path.display()))?;
    Ok(())
}
