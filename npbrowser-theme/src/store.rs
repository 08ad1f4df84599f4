// SPDX-License-Identifier: LGPL-3.0-only

//! # Preference Store
//!
//! The theme manager persists its flags through a small key-value
//! [PreferenceStore]. Where the values end up (a settings file, a platform
//! defaults database) is the embedder's business; [MemoryStore] is the
//! in-process implementation used by default and in tests.
//!
//! Reads fall back to registered defaults, then to the type's zero value,
//! mirroring how platform defaults databases behave.

use indexmap::IndexMap;
use std::collections::HashMap;

/// Keys the theme manager reads and writes.
///
/// These are carried over from the legacy settings layout and must not change,
/// or existing users lose their theme settings.
pub mod keys {
    /// Saved manual theme name (`"normal"` or `"dark"`).
    pub const THEME_NAME: &str = "prefKeyThemeName";
    /// Whether the theme follows the system appearance.
    pub const SYSTEM_THEME_IS_ON: &str = "prefKeySystemThemeSwitchOnOff";
    /// Whether screen brightness drives the manual theme.
    pub const AUTOMATIC_BRIGHTNESS_IS_ON: &str = "prefKeyAutomaticSwitchOnOff";
    /// Brightness below which the dark theme is chosen.
    pub const AUTOMATIC_BRIGHTNESS_THRESHOLD: &str = "prefKeyAutomaticSliderValue";
    /// Whether night mode is on.
    pub const NIGHT_MODE_IS_ON: &str = "profile.NightModeStatus";
    /// Per-window private mode flags, keyed by window id.
    pub const PRIVATE_MODE_BY_WINDOW: &str = "profile.PrivateModeWindowStatusByWindowUUID";
    /// Single-window private mode flag written by older versions.
    pub const LEGACY_PRIVATE_MODE_IS_ON: &str = "profile.PrivateModeStatus";
}

/// A value held by a [PreferenceStore].
#[derive(Debug, Clone, PartialEq)]
pub enum PreferenceValue {
    /// Boolean flag.
    Bool(bool),
    /// Floating point value.
    Float(f32),
    /// String value.
    String(String),
    /// String-keyed boolean flags.
    Flags(IndexMap<String, bool>),
}

/// A persistent key-value store for theme preferences.
///
/// Implementors only provide raw access; typed accessors are provided.
pub trait PreferenceStore {
    /// Get the stored value for `key`, falling back to a registered default.
    fn get(&self, key: &str) -> Option<PreferenceValue>;

    /// Store `value` under `key`.
    fn set(&mut self, key: &str, value: PreferenceValue);

    /// Whether a value (not a default) has been written for `key`.
    fn contains(&self, key: &str) -> bool;

    /// Register defaults returned by [PreferenceStore::get] for keys that were never written.
    fn register_defaults(&mut self, defaults: Vec<(String, PreferenceValue)>);

    /// Read a boolean, `false` if absent or of another type.
    fn bool(&self, key: &str) -> bool {
        matches!(self.get(key), Some(PreferenceValue::Bool(true)))
    }

    /// Read a float, `0.0` if absent or of another type.
    fn float(&self, key: &str) -> f32 {
        match self.get(key) {
            Some(PreferenceValue::Float(value)) => value,
            _ => 0.0,
        }
    }

    /// Read a string.
    fn string(&self, key: &str) -> Option<String> {
        match self.get(key) {
            Some(PreferenceValue::String(value)) => Some(value),
            _ => None,
        }
    }

    /// Read a flag map.
    fn flags(&self, key: &str) -> Option<IndexMap<String, bool>> {
        match self.get(key) {
            Some(PreferenceValue::Flags(flags)) => Some(flags),
            _ => None,
        }
    }

    /// Write a boolean.
    fn set_bool(&mut self, key: &str, value: bool) {
        self.set(key, PreferenceValue::Bool(value));
    }

    /// Write a float.
    fn set_float(&mut self, key: &str, value: f32) {
        self.set(key, PreferenceValue::Float(value));
    }

    /// Write a string.
    fn set_string(&mut self, key: &str, value: &str) {
        self.set(key, PreferenceValue::String(value.to_string()));
    }

    /// Write a flag map.
    fn set_flags(&mut self, key: &str, flags: IndexMap<String, bool>) {
        self.set(key, PreferenceValue::Flags(flags));
    }
}

/// In-memory [PreferenceStore].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, PreferenceValue>,
    defaults: HashMap<String, PreferenceValue>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style write, handy for seeding a store.
    pub fn with_value(mut self, key: &str, value: PreferenceValue) -> Self {
        self.set(key, value);
        self
    }

    /// Remove the written value for `key`; registered defaults remain.
    pub fn remove(&mut self, key: &str) -> Option<PreferenceValue> {
        self.values.remove(key)
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<PreferenceValue> {
        self.values
            .get(key)
            .or_else(|| self.defaults.get(key))
            .cloned()
    }

    fn set(&mut self, key: &str, value: PreferenceValue) {
        self.values.insert(key.to_string(), value);
    }

    fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn register_defaults(&mut self, defaults: Vec<(String, PreferenceValue)>) {
        self.defaults.extend(defaults);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_do_not_shadow_written_values() {
        let mut store = MemoryStore::new();
        store.set_bool(keys::SYSTEM_THEME_IS_ON, false);
        store.register_defaults(vec![(
            keys::SYSTEM_THEME_IS_ON.to_string(),
            PreferenceValue::Bool(true),
        )]);

        assert!(!store.bool(keys::SYSTEM_THEME_IS_ON));
        store.remove(keys::SYSTEM_THEME_IS_ON);
        assert!(store.bool(keys::SYSTEM_THEME_IS_ON));
        assert!(!store.contains(keys::SYSTEM_THEME_IS_ON));
    }

    #[test]
    fn test_typed_reads_ignore_mismatched_values() {
        let store = MemoryStore::new().with_value(keys::NIGHT_MODE_IS_ON, PreferenceValue::Float(1.0));
        assert!(!store.bool(keys::NIGHT_MODE_IS_ON));
        assert_eq!(store.float(keys::NIGHT_MODE_IS_ON), 1.0);
        assert_eq!(store.string(keys::NIGHT_MODE_IS_ON), None);
    }

    #[test]
    fn test_absent_values_read_as_zero() {
        let store = MemoryStore::new();
        assert!(!store.bool(keys::AUTOMATIC_BRIGHTNESS_IS_ON));
        assert_eq!(store.float(keys::AUTOMATIC_BRIGHTNESS_THRESHOLD), 0.0);
        assert_eq!(store.flags(keys::PRIVATE_MODE_BY_WINDOW), None);
    }
}
