// SPDX-License-Identifier: LGPL-3.0-only

//! # Theme Resolver
//!
//! Pure decision procedure turning a [ThemePreferences] snapshot into the
//! [ThemeType] a window should show.
//!
//! Precedence, highest first:
//!
//! 1. private mode on for the window → [ThemeType::PrivateMode]
//! 2. night mode on → [ThemeType::Dark]
//! 3. system theme on → the platform appearance
//! 4. otherwise the saved manual theme, or the platform appearance when none is saved

use crate::preferences::ThemePreferences;
use crate::theme::{InterfaceStyle, ThemeType};
use crate::window::WindowId;

/// Stateless resolver for per-window theme types.
pub struct ThemeResolver;

impl ThemeResolver {
    /// Resolve the theme type for `window`.
    ///
    /// Total and side-effect free.
    pub fn resolve(prefs: &ThemePreferences, window: WindowId, system: InterfaceStyle) -> ThemeType {
        if prefs.private_mode(window) {
            return ThemeType::PrivateMode;
        }
        if prefs.night_mode_enabled {
            return ThemeType::Dark;
        }
        if prefs.system_theme_enabled {
            return system.into();
        }
        Self::saved_or_system(prefs, system)
    }

    /// The theme for surfaces that do not belong to a window yet.
    ///
    /// Ignores per-window private mode and night mode.
    pub fn window_nonspecific(prefs: &ThemePreferences, system: InterfaceStyle) -> ThemeType {
        Self::saved_or_system(prefs, system)
    }

    /// The theme picked by automatic brightness.
    pub fn brightness_theme(brightness: f32, threshold: f32) -> ThemeType {
        if brightness < threshold {
            ThemeType::Dark
        } else {
            ThemeType::Light
        }
    }

    /// Whether `window` follows the platform appearance right now.
    pub fn follows_system(prefs: &ThemePreferences, window: WindowId) -> bool {
        prefs.system_theme_enabled && !prefs.night_mode_enabled && !prefs.private_mode(window)
    }

    fn saved_or_system(prefs: &ThemePreferences, system: InterfaceStyle) -> ThemeType {
        match prefs.saved_theme() {
            // Private mode is never saved; treat a stray value as dark.
            Some(ThemeType::PrivateMode) => ThemeType::Dark,
            Some(theme_type) => theme_type,
            None => system.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(system: bool, night: bool, saved: Option<&str>) -> ThemePreferences {
        ThemePreferences {
            system_theme_enabled: system,
            night_mode_enabled: night,
            saved_theme_name: saved.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_precedence_over_all_combinations() {
        let window = WindowId::new();
        let saved_names = [None, Some("normal"), Some("dark"), Some("private")];
        let systems = [InterfaceStyle::Light, InterfaceStyle::Dark];

        for private in [false, true] {
            for night in [false, true] {
                for system_on in [false, true] {
                    for saved in saved_names {
                        for system in systems {
                            let mut p = prefs(system_on, night, saved);
                            p.private_mode_by_window.insert(window, private);

                            let expected = if private {
                                ThemeType::PrivateMode
                            } else if night {
                                ThemeType::Dark
                            } else if system_on {
                                ThemeType::from(system)
                            } else {
                                match saved {
                                    Some("normal") => ThemeType::Light,
                                    Some("dark") | Some("private") => ThemeType::Dark,
                                    _ => ThemeType::from(system),
                                }
                            };

                            let first = ThemeResolver::resolve(&p, window, system);
                            assert_eq!(first, expected, "prefs {:?}, system {:?}", p, system);
                            assert_eq!(ThemeResolver::resolve(&p, window, system), first);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_private_mode_is_per_window() {
        let w1 = WindowId::new();
        let w2 = WindowId::new();
        let mut p = prefs(false, false, Some("normal"));
        p.private_mode_by_window.insert(w1, true);

        assert_eq!(ThemeResolver::resolve(&p, w1, InterfaceStyle::Dark), ThemeType::PrivateMode);
        assert_eq!(ThemeResolver::resolve(&p, w2, InterfaceStyle::Dark), ThemeType::Light);
    }

    #[test]
    fn test_window_nonspecific_ignores_overrides() {
        let window = WindowId::new();
        let mut p = prefs(true, true, Some("normal"));
        p.private_mode_by_window.insert(window, true);
        assert_eq!(
            ThemeResolver::window_nonspecific(&p, InterfaceStyle::Dark),
            ThemeType::Light
        );
        assert_eq!(
            ThemeResolver::window_nonspecific(&prefs(true, false, None), InterfaceStyle::Dark),
            ThemeType::Dark
        );
    }

    #[test]
    fn test_brightness_threshold_is_exclusive() {
        assert_eq!(ThemeResolver::brightness_theme(0.2, 0.5), ThemeType::Dark);
        assert_eq!(ThemeResolver::brightness_theme(0.5, 0.5), ThemeType::Light);
        assert_eq!(ThemeResolver::brightness_theme(0.9, 0.5), ThemeType::Light);
    }
}
