//! # GUI Theme
//!
//! Light and dark palettes for the dashboard, persisted as JSON and applied to
//! both egui themes through `style_mut_of`.
//!
//! | Token | Light | Dark |
//! |-------|-------|------|
//! | primary | `#2196F3` blue | `#64FFDA` teal |
//! | secondary | `#CFD8DC` blue grey | `#CFD8DC` blue grey |
//! | error | `#FF5252` red | `#EC407A` pink |

use std::path::Path;

use egui::{Color32, Context, FontId, Stroke, TextStyle, Visuals};
use egui::Theme as EguiTheme;
use serde::{Deserialize, Serialize};

use crate::core::error::{AppError, Result};

/// Where the theme preference is stored
pub const THEME_CONFIG_PATH: &str = "./dashboard-theme.json";

pub const H1_SIZE: f32 = 48.0;
pub const H2_SIZE: f32 = 36.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

/// Serializable palette, colors as RGB triples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    pub primary: [u8; 3],
    pub secondary: [u8; 3],
    pub error: [u8; 3],
    pub success: [u8; 3],
    pub warning: [u8; 3],
    pub background: [u8; 3],
    pub surface: [u8; 3],
    pub text: [u8; 3],
    pub text_secondary: [u8; 3],
    pub border: [u8; 3],
}

impl PaletteConfig {
    pub fn light() -> Self {
        Self {
            primary: [33, 150, 243],
            secondary: [207, 216, 220],
            error: [255, 82, 82],
            success: [46, 125, 50],
            warning: [237, 108, 2],
            background: [250, 250, 250],
            surface: [255, 255, 255],
            text: [33, 33, 33],
            text_secondary: [117, 117, 117],
            border: [224, 224, 224],
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: [100, 255, 218],
            secondary: [207, 216, 220],
            error: [236, 64, 122],
            success: [102, 187, 106],
            warning: [255, 167, 38],
            background: [18, 18, 18],
            surface: [30, 30, 30],
            text: [255, 255, 255],
            text_secondary: [176, 176, 176],
            border: [66, 66, 66],
        }
    }

    pub fn to_palette(&self) -> Palette {
        let rgb = |c: [u8; 3]| Color32::from_rgb(c[0], c[1], c[2]);
        Palette {
            primary: rgb(self.primary),
            secondary: rgb(self.secondary),
            error: rgb(self.error),
            success: rgb(self.success),
            warning: rgb(self.warning),
            background: rgb(self.background),
            surface: rgb(self.surface),
            text: rgb(self.text),
            text_secondary: rgb(self.text_secondary),
            border: rgb(self.border),
        }
    }
}

/// Persisted theme preference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub mode: ThemeMode,
    #[serde(default = "PaletteConfig::light")]
    pub light: PaletteConfig,
    #[serde(default = "PaletteConfig::dark")]
    pub dark: PaletteConfig,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: ThemeMode::default(),
            light: PaletteConfig::light(),
            dark: PaletteConfig::dark(),
        }
    }
}

impl ThemeConfig {
    /// Load from a JSON file; a missing file yields the defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("Invalid theme file {}: {}", path.display(), e)))
    }

    /// Save to a JSON file, creating the parent directory if needed
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::Config(format!("Failed to create {}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize theme: {}", e)))?;
        std::fs::write(path, content)
            .map_err(|e| AppError::Config(format!("Failed to write {}: {}", path.display(), e)))
    }

    pub fn palette(&self) -> Palette {
        match self.mode {
            ThemeMode::Light => self.light.to_palette(),
            ThemeMode::Dark => self.dark.to_palette(),
        }
    }
}

/// Resolved colors for the active mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: Color32,
    pub secondary: Color32,
    pub error: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub background: Color32,
    pub surface: Color32,
    pub text: Color32,
    pub text_secondary: Color32,
    pub border: Color32,
}

/// Active theme handed to every widget
#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemeMode,
    pub colors: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            mode: config.mode,
            colors: config.palette(),
        }
    }

    /// egui visuals for the active palette
    pub fn visuals(&self) -> Visuals {
        let c = &self.colors;
        let mut visuals = match self.mode {
            ThemeMode::Light => Visuals::light(),
            ThemeMode::Dark => Visuals::dark(),
        };

        visuals.override_text_color = Some(c.text);
        visuals.panel_fill = c.background;
        visuals.window_fill = c.surface;
        visuals.window_stroke = Stroke::new(1.0, c.border);
        visuals.faint_bg_color = c.surface;
        visuals.extreme_bg_color = c.background;

        visuals.widgets.noninteractive.bg_fill = c.surface;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, c.border);
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, c.border);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, c.primary);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, c.primary);

        visuals.selection.bg_fill = c.primary.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, c.primary);
        visuals.hyperlink_color = c.primary;
        visuals.error_fg_color = c.error;
        visuals.warn_fg_color = c.warning;

        visuals
    }

    /// Apply to both egui themes and select the one matching `mode`
    pub fn apply(&self, ctx: &Context) {
        let visuals = self.visuals();

        for egui_theme in [EguiTheme::Dark, EguiTheme::Light] {
            let visuals = visuals.clone();
            ctx.style_mut_of(egui_theme, |style| {
                style.visuals = visuals;
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(12.0, 6.0);
                style.spacing.window_margin = egui::Margin::same(12);
                style
                    .text_styles
                    .insert(TextStyle::Heading, FontId::proportional(H2_SIZE * 0.6));
            });
        }

        ctx.set_theme(match self.mode {
            ThemeMode::Light => EguiTheme::Light,
            ThemeMode::Dark => EguiTheme::Dark,
        });

        tracing::debug!(mode = self.mode.label(), "Theme applied");
    }

    /// Page title font
    pub fn h1(&self) -> FontId {
        FontId::proportional(H1_SIZE * 0.6)
    }

    pub fn h2(&self) -> FontId {
        FontId::proportional(H2_SIZE * 0.6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark_teal() {
        let theme = Theme::default();
        assert_eq!(theme.mode, ThemeMode::Dark);
        assert_eq!(theme.colors.primary, Color32::from_rgb(100, 255, 218));
        assert_eq!(theme.colors.error, Color32::from_rgb(236, 64, 122));
    }

    #[test]
    fn test_light_palette() {
        let config = ThemeConfig {
            mode: ThemeMode::Light,
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.colors.primary, Color32::from_rgb(33, 150, 243));
        assert_eq!(theme.colors.secondary, Color32::from_rgb(207, 216, 220));
        assert!(!theme.visuals().dark_mode);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_missing_file_gives_default() {
        let path = std::env::temp_dir().join("dashboard-theme-does-not-exist.json");
        let config = ThemeConfig::load_from_file(&path).unwrap();
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("dashboard-theme-test-{}", std::process::id()));
        let path = dir.join("theme.json");
        let config = ThemeConfig {
            mode: ThemeMode::Light,
            ..ThemeConfig::default()
        };

        config.save_to_file(&path).unwrap();
        let loaded = ThemeConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.mode, ThemeMode::Light);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_partial_file_fills_palettes() {
        let config: ThemeConfig = serde_json::from_str(r#"{"mode":"light"}"#).unwrap();
        assert_eq!(config.light, PaletteConfig::light());
        assert_eq!(config.dark, PaletteConfig::dark());
    }
}
