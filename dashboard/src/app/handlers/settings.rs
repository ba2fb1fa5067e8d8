//! # Settings Handlers
//!
//! Theme preference load, save and toggle.

use std::path::{Path, PathBuf};

use crate::core::error::Result;
use crate::ui::theme::{ThemeConfig, THEME_CONFIG_PATH};

/// Default theme file path
pub fn get_config_path() -> PathBuf {
    PathBuf::from(THEME_CONFIG_PATH)
}

/// Load the theme preference, falling back to defaults on any error
pub fn load_settings(path: &Path) -> ThemeConfig {
    match ThemeConfig::load_from_file(path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), mode = ?config.mode, "Loaded theme configuration");
            config
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to load theme config, using defaults");
            ThemeConfig::default()
        }
    }
}

pub fn save_settings(config: &ThemeConfig, path: &Path) -> Result<()> {
    config.save_to_file(path)?;
    tracing::info!(path = %path.display(), "Saved theme configuration");
    Ok(())
}

/// Flip light/dark and persist. A failed save keeps the new mode for this
/// session.
pub fn handle_theme_toggle(config: &mut ThemeConfig, path: &Path) {
    config.mode = config.mode.toggled();
    tracing::info!(mode = ?config.mode, "Theme toggled");

    if let Err(e) = save_settings(config, path) {
        tracing::error!(error = %e, "Failed to save theme configuration");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeMode;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("dashboard-settings-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let config = load_settings(&temp_path("missing"));
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn test_toggle_persists_mode() {
        let path = temp_path("toggle");
        let mut config = ThemeConfig::default();
        let initial = config.mode;

        handle_theme_toggle(&mut config, &path);
        assert_ne!(config.mode, initial);
        assert_eq!(load_settings(&path).mode, config.mode);

        handle_theme_toggle(&mut config, &path);
        assert_eq!(load_settings(&path).mode, initial);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_file_loads_defaults() {
        let path = temp_path("invalid");
        std::fs::write(&path, "not json").unwrap();
        assert_eq!(load_settings(&path).mode, ThemeMode::default());
        let _ = std::fs::remove_file(&path);
    }
}
