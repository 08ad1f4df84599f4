// SPDX-License-Identifier: LGPL-3.0-only

//! In-memory snapshot of the persisted theme preferences.

use indexmap::IndexMap;

use crate::store::{keys, PreferenceStore};
use crate::theme::ThemeType;
use crate::window::WindowId;

/// The theme flags the resolver works from.
///
/// A snapshot of the [PreferenceStore]; the manager writes every change
/// through to the store and keeps this copy in sync.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemePreferences {
    /// Follow the platform appearance instead of the saved theme.
    pub system_theme_enabled: bool,
    /// Force the dark theme (below private mode in precedence).
    pub night_mode_enabled: bool,
    /// Let screen brightness pick the saved theme.
    pub automatic_brightness_enabled: bool,
    /// Brightness below which the dark theme is picked, in `0.0..=1.0`.
    pub brightness_threshold: f32,
    /// Saved manual theme, in its stored string form.
    pub saved_theme_name: Option<String>,
    /// Private mode flag per window.
    pub private_mode_by_window: IndexMap<WindowId, bool>,
}

impl Default for ThemePreferences {
    fn default() -> Self {
        Self {
            system_theme_enabled: true,
            night_mode_enabled: false,
            automatic_brightness_enabled: false,
            brightness_threshold: 0.0,
            saved_theme_name: None,
            private_mode_by_window: IndexMap::new(),
        }
    }
}

impl ThemePreferences {
    /// Read all theme preferences from a store.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let private_mode_by_window = store
            .flags(keys::PRIVATE_MODE_BY_WINDOW)
            .map(|flags| parse_window_flags(&flags))
            .unwrap_or_default();

        Self {
            system_theme_enabled: store.bool(keys::SYSTEM_THEME_IS_ON),
            night_mode_enabled: store.bool(keys::NIGHT_MODE_IS_ON),
            automatic_brightness_enabled: store.bool(keys::AUTOMATIC_BRIGHTNESS_IS_ON),
            brightness_threshold: store.float(keys::AUTOMATIC_BRIGHTNESS_THRESHOLD),
            saved_theme_name: store.string(keys::THEME_NAME),
            private_mode_by_window,
        }
    }

    /// The saved manual theme, if one was stored and parses.
    pub fn saved_theme(&self) -> Option<ThemeType> {
        let name = self.saved_theme_name.as_deref()?;
        match name.parse() {
            Ok(theme_type) => Some(theme_type),
            Err(_) => {
                log::warn!("Ignoring unknown saved theme name {:?}", name);
                None
            },
        }
    }

    /// Whether private mode is on for `window`.
    pub fn private_mode(&self, window: WindowId) -> bool {
        self.private_mode_by_window
            .get(&window)
            .copied()
            .unwrap_or(false)
    }

    /// The per-window flags in their stored form.
    pub(crate) fn stored_private_flags(&self) -> IndexMap<String, bool> {
        self.private_mode_by_window
            .iter()
            .map(|(window, on)| (window.key(), *on))
            .collect()
    }
}

fn parse_window_flags(flags: &IndexMap<String, bool>) -> IndexMap<WindowId, bool> {
    flags
        .iter()
        .filter_map(|(key, on)| match key.parse::<WindowId>() {
            Ok(window) => Some((window, *on)),
            Err(e) => {
                log::warn!("Dropping private mode flag for malformed window id {:?}: {}", key, e);
                None
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, PreferenceValue};

    #[test]
    fn test_load_reads_every_key() {
        let window = WindowId::new();
        let mut flags = IndexMap::new();
        flags.insert(window.key(), true);
        flags.insert("not-a-uuid".to_string(), true);

        let store = MemoryStore::new()
            .with_value(keys::SYSTEM_THEME_IS_ON, PreferenceValue::Bool(false))
            .with_value(keys::NIGHT_MODE_IS_ON, PreferenceValue::Bool(true))
            .with_value(keys::AUTOMATIC_BRIGHTNESS_IS_ON, PreferenceValue::Bool(true))
            .with_value(keys::AUTOMATIC_BRIGHTNESS_THRESHOLD, PreferenceValue::Float(0.4))
            .with_value(keys::THEME_NAME, PreferenceValue::String("dark".into()))
            .with_value(keys::PRIVATE_MODE_BY_WINDOW, PreferenceValue::Flags(flags));

        let prefs = ThemePreferences::load(&store);
        assert!(!prefs.system_theme_enabled);
        assert!(prefs.night_mode_enabled);
        assert!(prefs.automatic_brightness_enabled);
        assert_eq!(prefs.brightness_threshold, 0.4);
        assert_eq!(prefs.saved_theme(), Some(ThemeType::Dark));
        assert!(prefs.private_mode(window));
        assert_eq!(prefs.private_mode_by_window.len(), 1);
    }

    #[test]
    fn test_unknown_saved_theme_is_absent() {
        let prefs = ThemePreferences {
            saved_theme_name: Some("sepia".into()),
            ..Default::default()
        };
        assert_eq!(prefs.saved_theme(), None);
    }

    #[test]
    fn test_unknown_window_is_not_private() {
        assert!(!ThemePreferences::default().private_mode(WindowId::new()));
    }
}
