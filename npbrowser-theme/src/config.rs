// SPDX-License-Identifier: LGPL-3.0-only

//! # Theme Configuration
//!
//! [ThemeConfig] supplies the first-run defaults of the theme preferences and
//! optional palette overrides. Values already written to the preference store
//! always win over the config; the config only fills in what the user never
//! chose.
//!
//! ## Environment Variables
//!
//! - `NPBROWSER_THEME`: default manual theme (`light`/`normal` or `dark`)
//! - `NPBROWSER_NIGHT_MODE`: default night mode (`1`/`true`/`on`)
//! - `NPBROWSER_THEME_CONFIG`: path to a TOML configuration file
//!
//! ## Configuration File Format
//!
//! ```toml
//! [theme]
//! default = "dark"
//! system_theme = false
//! night_mode = false
//! automatic_brightness = true
//! brightness_threshold = 0.35
//!
//! [colors.dark]
//! action_primary = "#00ddff"
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

use crate::error::{ThemeError, ThemeResult};
use crate::palette::Palette;
use crate::roles::ColorRole;
use crate::store::{keys, PreferenceValue};
use crate::theme::{Theme, ThemeType};
use crate::util::Color;

/// Theme defaults and palette overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    /// Manual theme used when none is saved yet.
    pub default_theme: Option<ThemeType>,
    /// Whether to follow the system appearance by default.
    pub system_theme: bool,
    /// Whether night mode starts on.
    pub night_mode: bool,
    /// Whether automatic brightness starts on.
    pub automatic_brightness: bool,
    /// Default brightness threshold.
    pub brightness_threshold: f32,
    palette_overrides: HashMap<ThemeType, HashMap<ColorRole, Color>>,
}

/// Partial configuration as read from one file; unset fields keep the previous value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeConfigFile {
    /// The `[theme]` table.
    #[serde(default)]
    pub theme: ThemeSection,
    /// The `[colors.<theme>]` tables.
    #[serde(default)]
    pub colors: HashMap<String, HashMap<String, Color>>,
}

/// The `[theme]` table of a configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeSection {
    /// Default manual theme.
    pub default: Option<String>,
    /// Follow the system appearance.
    pub system_theme: Option<bool>,
    /// Night mode.
    pub night_mode: Option<bool>,
    /// Automatic brightness.
    pub automatic_brightness: Option<bool>,
    /// Brightness threshold.
    pub brightness_threshold: Option<f32>,
}

impl ThemeConfig {
    /// Create a configuration with the built-in defaults.
    pub fn new() -> Self {
        Self {
            default_theme: None,
            system_theme: true,
            night_mode: false,
            automatic_brightness: false,
            brightness_threshold: 0.0,
            palette_overrides: HashMap::new(),
        }
    }

    /// Create a configuration from environment variables or use defaults.
    ///
    /// An unreadable `NPBROWSER_THEME_CONFIG` file is logged and ignored.
    pub fn from_env_or_default() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Like [ThemeConfig::from_env_or_default], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        if let Some(path) = lookup("NPBROWSER_THEME_CONFIG") {
            match Self::read_file(&path) {
                Ok(file) => {
                    if let Err(e) = config.merge(file) {
                        log::warn!("Ignoring invalid theme config {:?}: {}", path, e);
                    }
                },
                Err(e) => log::warn!("Failed to load theme config {:?}: {}", path, e),
            }
        }

        if let Some(theme) = lookup("NPBROWSER_THEME") {
            match theme.parse::<ThemeType>() {
                Ok(ThemeType::PrivateMode) => {
                    log::warn!("NPBROWSER_THEME cannot select private mode; ignoring")
                },
                Ok(theme_type) => config.default_theme = Some(theme_type),
                Err(e) => log::warn!("Ignoring NPBROWSER_THEME: {}", e),
            }
        }

        if let Some(night) = lookup("NPBROWSER_NIGHT_MODE") {
            config.night_mode = matches!(
                night.trim().to_lowercase().as_str(),
                "1" | "true" | "on" | "yes"
            );
        }

        config
    }

    /// Load a configuration from a TOML file on top of the defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let mut config = Self::new();
        config.merge(Self::read_file(path)?)?;
        Ok(config)
    }

    /// Load a configuration from TOML content on top of the defaults.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        let file: ThemeConfigFile =
            toml::from_str(content).map_err(|e| ThemeError::parse_error("<inline>", e.to_string()))?;
        let mut config = Self::new();
        config.merge(file)?;
        Ok(config)
    }

    /// Read and parse one configuration file without applying it.
    pub fn read_file<P: AsRef<Path>>(path: P) -> ThemeResult<ThemeConfigFile> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::file_not_found(path));
        }
        log::info!("Loading theme config from: {:?}", path);
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ThemeError::parse_error(path, e.to_string()))
    }

    /// Apply a partial configuration; set fields override the current ones.
    ///
    /// Validation happens before anything is applied, so on error `self` is unchanged.
    pub fn merge(&mut self, file: ThemeConfigFile) -> ThemeResult<()> {
        let default_theme = match file.theme.default.as_deref() {
            Some(name) => match name.parse::<ThemeType>()? {
                ThemeType::PrivateMode => return Err(ThemeError::not_found(name)),
                theme_type => Some(theme_type),
            },
            None => None,
        };

        if let Some(threshold) = file.theme.brightness_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ThemeError::InvalidBrightness(threshold));
            }
        }

        let mut overrides = Vec::new();
        for (theme_name, colors) in &file.colors {
            let theme_type: ThemeType = theme_name.parse()?;
            for (role_name, color) in colors {
                match ColorRole::from_str(role_name) {
                    Some(role) => overrides.push((theme_type, role, *color)),
                    None => log::warn!("Unknown color role {:?} in [colors.{}]", role_name, theme_name),
                }
            }
        }

        if default_theme.is_some() {
            self.default_theme = default_theme;
        }
        if let Some(on) = file.theme.system_theme {
            self.system_theme = on;
        }
        if let Some(on) = file.theme.night_mode {
            self.night_mode = on;
        }
        if let Some(on) = file.theme.automatic_brightness {
            self.automatic_brightness = on;
        }
        if let Some(threshold) = file.theme.brightness_threshold {
            self.brightness_threshold = threshold;
        }
        for (theme_type, role, color) in overrides {
            self.palette_overrides
                .entry(theme_type)
                .or_default()
                .insert(role, color);
        }

        Ok(())
    }

    /// Set the default manual theme.
    pub fn with_default_theme(mut self, theme: ThemeType) -> Self {
        self.default_theme = Some(theme);
        self
    }

    /// Set whether the system appearance is followed by default.
    pub fn with_system_theme(mut self, on: bool) -> Self {
        self.system_theme = on;
        self
    }

    /// Set whether night mode starts on.
    pub fn with_night_mode(mut self, on: bool) -> Self {
        self.night_mode = on;
        self
    }

    /// Set automatic brightness defaults. The threshold is clamped to `0.0..=1.0`; NaN becomes `0.0`.
    pub fn with_automatic_brightness(mut self, on: bool, threshold: f32) -> Self {
        self.automatic_brightness = on;
        self.brightness_threshold = if threshold.is_nan() { 0.0 } else { threshold.clamp(0.0, 1.0) };
        self
    }

    /// Override one palette color.
    pub fn with_color(mut self, theme_type: ThemeType, role: ColorRole, color: Color) -> Self {
        self.palette_overrides
            .entry(theme_type)
            .or_default()
            .insert(role, color);
        self
    }

    /// Store defaults derived from this configuration.
    pub fn preference_defaults(&self) -> Vec<(String, PreferenceValue)> {
        let mut defaults = vec![
            (keys::SYSTEM_THEME_IS_ON.to_string(), PreferenceValue::Bool(self.system_theme)),
            (keys::NIGHT_MODE_IS_ON.to_string(), PreferenceValue::Bool(self.night_mode)),
            (
                keys::AUTOMATIC_BRIGHTNESS_IS_ON.to_string(),
                PreferenceValue::Bool(self.automatic_brightness),
            ),
            (
                keys::AUTOMATIC_BRIGHTNESS_THRESHOLD.to_string(),
                PreferenceValue::Float(self.brightness_threshold),
            ),
        ];
        if let Some(theme) = self.default_theme {
            defaults.push((
                keys::THEME_NAME.to_string(),
                PreferenceValue::String(theme.as_str().to_string()),
            ));
        }
        defaults
    }

    /// Build the theme for `theme_type`, applying palette overrides.
    pub fn theme_for(&self, theme_type: ThemeType) -> Theme {
        let mut palette = Palette::new(theme_type);
        if let Some(overrides) = self.palette_overrides.get(&theme_type) {
            palette.merge(overrides);
        }
        Theme::with_palette(palette)
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::rgb8;

    #[test]
    fn test_from_toml_reads_theme_table() {
        let config = ThemeConfig::from_toml(
            r##"
            [theme]
            default = "dark"
            system_theme = false
            automatic_brightness = true
            brightness_threshold = 0.25

            [colors.private]
            action_primary = "#010203"
            sparkle = "#ffffff"
            "##,
        )
        .unwrap();

        assert_eq!(config.default_theme, Some(ThemeType::Dark));
        assert!(!config.system_theme);
        assert!(!config.night_mode);
        assert!(config.automatic_brightness);
        assert_eq!(config.brightness_threshold, 0.25);
        assert_eq!(
            config
                .theme_for(ThemeType::PrivateMode)
                .color(ColorRole::ActionPrimary),
            rgb8(1, 2, 3)
        );
    }

    #[test]
    fn test_merge_rejects_private_default_without_changes() {
        let mut config = ThemeConfig::new().with_night_mode(true);
        let file: ThemeConfigFile = toml::from_str(
            r#"
            [theme]
            default = "private"
            night_mode = false
            "#,
        )
        .unwrap();

        assert!(config.merge(file).is_err());
        assert!(config.night_mode);
    }

    #[test]
    fn test_merge_rejects_out_of_range_threshold() {
        let err = ThemeConfig::from_toml("[theme]\nbrightness_threshold = 1.5\n").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidBrightness(_)));
    }

    #[test]
    fn test_automatic_brightness_threshold_is_clamped() {
        assert_eq!(ThemeConfig::new().with_automatic_brightness(true, 2.0).brightness_threshold, 1.0);
        assert_eq!(
            ThemeConfig::new()
                .with_automatic_brightness(true, f32::NAN)
                .brightness_threshold,
            0.0
        );
        let defaults = ThemeConfig::new()
            .with_automatic_brightness(true, f32::NAN)
            .preference_defaults();
        assert!(defaults.contains(&(
            keys::AUTOMATIC_BRIGHTNESS_THRESHOLD.to_string(),
            PreferenceValue::Float(0.0)
        )));
    }

    #[test]
    fn test_invalid_color_is_a_parse_error() {
        let err = ThemeConfig::from_toml("[colors.dark]\nlayer1 = \"#12\"\n").unwrap_err();
        assert!(matches!(err, ThemeError::ConfigParseError { .. }));
    }

    #[test]
    fn test_env_lookup() {
        let config = ThemeConfig::from_lookup(|name| match name {
            "NPBROWSER_THEME" => Some("light".to_string()),
            "NPBROWSER_NIGHT_MODE" => Some("On".to_string()),
            _ => None,
        });
        assert_eq!(config.default_theme, Some(ThemeType::Light));
        assert!(config.night_mode);

        let ignored = ThemeConfig::from_lookup(|name| match name {
            "NPBROWSER_THEME" => Some("private".to_string()),
            "NPBROWSER_THEME_CONFIG" => Some("/nonexistent/theme.toml".to_string()),
            _ => None,
        });
        assert_eq!(ignored, ThemeConfig::new());
    }

    #[test]
    fn test_preference_defaults_include_saved_theme_only_when_set() {
        let keys_of = |config: &ThemeConfig| {
            config
                .preference_defaults()
                .into_iter()
                .map(|(key, _)| key)
                .collect::<Vec<_>>()
        };
        assert!(!keys_of(&ThemeConfig::new()).contains(&keys::THEME_NAME.to_string()));
        assert!(keys_of(&ThemeConfig::new().with_default_theme(ThemeType::Dark))
            .contains(&keys::THEME_NAME.to_string()));
    }
}
