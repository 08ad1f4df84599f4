// SPDX-License-Identifier: LGPL-3.0-only

//! # Theme Manager
//!
//! [ThemeManager] owns the theme preferences, caches the resolved theme of
//! every registered window and tells observers when a window's theme changes.
//!
//! ```rust
//! use npbrowser_theme::appearance::FixedAppearance;
//! use npbrowser_theme::manager::ThemeManager;
//! use npbrowser_theme::store::MemoryStore;
//! use npbrowser_theme::theme::{InterfaceStyle, ThemeType};
//! use npbrowser_theme::window::WindowId;
//!
//! let mut manager = ThemeManager::new(MemoryStore::new(), FixedAppearance::new(InterfaceStyle::Light));
//! let window = WindowId::new();
//! manager.register_window(window);
//!
//! manager.set_private_mode(true, window);
//! assert_eq!(manager.current_theme_type(window), ThemeType::PrivateMode);
//! ```

use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

use crate::appearance::{AppearanceSource, FixedAppearance};
use crate::config::ThemeConfig;
use crate::events::{SubscriptionId, ThemeEvent, ThemeEvents};
use crate::preferences::ThemePreferences;
use crate::resolver::ThemeResolver;
use crate::store::{keys, MemoryStore, PreferenceStore};
use crate::theme::{Theme, ThemeType};
use crate::window::WindowId;

/// The cached theme of one registered window.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
    /// The window this theme belongs to.
    pub window_id: WindowId,
    /// The theme the window shows.
    pub theme: Theme,
}

/// Per-window theme state and the preferences that drive it.
pub struct ThemeManager {
    store: Box<dyn PreferenceStore + Send + Sync>,
    appearance: Box<dyn AppearanceSource + Send + Sync>,
    config: ThemeConfig,
    prefs: ThemePreferences,
    windows: IndexMap<WindowId, ResolvedTheme>,
    events: ThemeEvents,
    last_brightness: f32,
}

impl ThemeManager {
    /// Create a manager with the default configuration.
    pub fn new(
        store: impl PreferenceStore + Send + Sync + 'static,
        appearance: impl AppearanceSource + Send + Sync + 'static,
    ) -> Self {
        Self::with_config(store, appearance, ThemeConfig::new())
    }

    /// Create a manager whose first-run defaults and palettes come from `config`.
    pub fn with_config(
        store: impl PreferenceStore + Send + Sync + 'static,
        appearance: impl AppearanceSource + Send + Sync + 'static,
        config: ThemeConfig,
    ) -> Self {
        let last_brightness = appearance.screen_brightness();
        let mut store: Box<dyn PreferenceStore + Send + Sync> = Box::new(store);
        store.register_defaults(config.preference_defaults());
        let prefs = ThemePreferences::load(store.as_ref());
        log::debug!("Loaded theme preferences: {:?}", prefs);

        Self {
            store,
            appearance: Box::new(appearance),
            config,
            prefs,
            windows: IndexMap::new(),
            events: ThemeEvents::new(),
            last_brightness,
        }
    }

    /// Start tracking `window` and resolve its theme.
    ///
    /// Observers are notified of the initial theme. Registering an already
    /// registered window re-resolves it and only notifies on change.
    pub fn register_window(&mut self, window: WindowId) {
        self.migrate_legacy_private_mode(window);

        if self.prefs.saved_theme().is_none() {
            let nonspecific = ThemeResolver::window_nonspecific(&self.prefs, self.system_appearance());
            self.persist_saved_theme(nonspecific);
        }

        if self.windows.contains_key(&window) {
            self.refresh_window(window);
            return;
        }

        let theme_type = self.resolve(window);
        log::debug!("Registered window {} with theme {}", window, theme_type);
        self.windows.insert(
            window,
            ResolvedTheme {
                window_id: window,
                theme: self.config.theme_for(theme_type),
            },
        );
        self.events.emit(&ThemeEvent::Changed {
            window_id: window,
            theme_type,
        });
    }

    /// Stop tracking `window`. Its private mode flag stays stored.
    pub fn unregister_window(&mut self, window: WindowId) {
        if self.windows.shift_remove(&window).is_some() {
            log::debug!("Unregistered window {}", window);
        }
    }

    /// Whether `window` is registered.
    pub fn is_registered(&self, window: WindowId) -> bool {
        self.windows.contains_key(&window)
    }

    /// Registered windows, in registration order.
    pub fn windows(&self) -> impl Iterator<Item = &ResolvedTheme> {
        self.windows.values()
    }

    /// The theme of `window`; the dark theme for unregistered windows.
    pub fn current_theme(&self, window: WindowId) -> Theme {
        match self.windows.get(&window) {
            Some(resolved) => resolved.theme.clone(),
            None => {
                log::warn!("Theme requested for unregistered window {}; using dark", window);
                self.config.theme_for(ThemeType::Dark)
            },
        }
    }

    /// The theme type of `window`; [ThemeType::Dark] for unregistered windows.
    pub fn current_theme_type(&self, window: WindowId) -> ThemeType {
        self.windows
            .get(&window)
            .map(|resolved| resolved.theme.theme_type())
            .unwrap_or(ThemeType::Dark)
    }

    /// The saved theme, for surfaces not tied to a window.
    pub fn window_nonspecific_theme(&self) -> Theme {
        let theme_type = ThemeResolver::window_nonspecific(&self.prefs, self.system_appearance());
        self.config.theme_for(theme_type)
    }

    /// Change the manual theme as seen from `window`.
    ///
    /// No-op when `window` already shows `theme_type`. [ThemeType::PrivateMode]
    /// is never saved; use [ThemeManager::set_private_mode] for that.
    pub fn set_theme(&mut self, theme_type: ThemeType, window: WindowId) {
        if self.current_theme_type(window) == theme_type {
            return;
        }
        self.persist_saved_theme(theme_type);
        self.refresh_all();
    }

    /// Re-resolve `window` from the current preferences.
    pub fn reload_theme(&mut self, window: WindowId) {
        self.refresh_window(window);
    }

    /// Whether private mode is on for `window`.
    pub fn private_mode(&self, window: WindowId) -> bool {
        self.prefs.private_mode(window)
    }

    /// Turn private mode on or off for `window` only.
    pub fn set_private_mode(&mut self, on: bool, window: WindowId) {
        self.migrate_legacy_private_mode(window);
        if self.prefs.private_mode(window) == on {
            return;
        }

        self.prefs.private_mode_by_window.insert(window, on);
        self.store
            .set_flags(keys::PRIVATE_MODE_BY_WINDOW, self.prefs.stored_private_flags());
        log::debug!("Private mode {} for window {}", if on { "on" } else { "off" }, window);

        self.refresh_window(window);
    }

    /// Turn night mode on or off for all windows.
    pub fn set_night_mode(&mut self, on: bool) {
        if self.prefs.night_mode_enabled == on {
            return;
        }
        self.prefs.night_mode_enabled = on;
        self.store.set_bool(keys::NIGHT_MODE_IS_ON, on);
        self.refresh_all();
    }

    /// Follow (or stop following) the system appearance.
    ///
    /// When switched off with automatic brightness on, brightness picks the theme.
    pub fn set_system_theme_enabled(&mut self, on: bool) {
        self.prefs.system_theme_enabled = on;
        self.store.set_bool(keys::SYSTEM_THEME_IS_ON, on);

        if on {
            self.on_system_appearance_changed();
        } else {
            if self.prefs.automatic_brightness_enabled {
                self.apply_brightness(self.last_brightness);
            }
            self.refresh_all();
        }
    }

    /// Configure automatic brightness in one step.
    pub fn set_automatic_brightness(&mut self, on: bool, threshold: f32) {
        self.prefs.automatic_brightness_enabled = on;
        self.store.set_bool(keys::AUTOMATIC_BRIGHTNESS_IS_ON, on);
        self.store_threshold(threshold);
        self.brightness_changed();
    }

    /// Turn automatic brightness on or off.
    pub fn set_automatic_brightness_enabled(&mut self, on: bool) {
        if self.prefs.automatic_brightness_enabled == on {
            return;
        }
        self.prefs.automatic_brightness_enabled = on;
        self.store.set_bool(keys::AUTOMATIC_BRIGHTNESS_IS_ON, on);
        self.brightness_changed();
    }

    /// Change the brightness threshold; clamped to `0.0..=1.0`.
    pub fn set_brightness_threshold(&mut self, threshold: f32) {
        self.store_threshold(threshold);
        self.brightness_changed();
    }

    /// The platform appearance changed, or the app became active again.
    pub fn on_system_appearance_changed(&mut self) {
        if self.prefs.system_theme_enabled && !self.prefs.night_mode_enabled {
            // Keep the saved theme in step so turning the system theme off keeps the current look.
            let system: ThemeType = self.system_appearance().into();
            self.persist_saved_theme(system);
        }
        self.refresh_all();
    }

    /// The screen brightness changed to `brightness`.
    ///
    /// The value is remembered for later threshold and toggle changes, but only
    /// picks a theme while automatic brightness is on.
    pub fn on_brightness_changed(&mut self, brightness: f32) {
        self.last_brightness = brightness;
        if !self.prefs.automatic_brightness_enabled {
            return;
        }
        self.apply_brightness(brightness);
        self.refresh_all();
    }

    /// Subscribe to theme changes.
    pub fn subscribe(&mut self, observer: impl Fn(&ThemeEvent) + Send + Sync + 'static) -> SubscriptionId {
        self.events.subscribe(observer)
    }

    /// Remove a subscription. Returns whether it existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// The current preferences.
    pub fn preferences(&self) -> &ThemePreferences {
        &self.prefs
    }

    /// Whether the theme follows the system appearance.
    pub fn system_theme_enabled(&self) -> bool {
        self.prefs.system_theme_enabled
    }

    /// Whether night mode is on.
    pub fn night_mode_enabled(&self) -> bool {
        self.prefs.night_mode_enabled
    }

    /// Whether automatic brightness is on.
    pub fn automatic_brightness_enabled(&self) -> bool {
        self.prefs.automatic_brightness_enabled
    }

    /// The automatic brightness threshold.
    pub fn brightness_threshold(&self) -> f32 {
        self.prefs.brightness_threshold
    }

    /// The preference store (for embedders that persist it).
    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    fn system_appearance(&self) -> crate::theme::InterfaceStyle {
        self.appearance.system_appearance()
    }

    fn resolve(&self, window: WindowId) -> ThemeType {
        ThemeResolver::resolve(&self.prefs, window, self.system_appearance())
    }

    fn brightness_changed(&mut self) {
        if self.prefs.automatic_brightness_enabled {
            self.apply_brightness(self.last_brightness);
        }
        self.refresh_all();
    }

    fn apply_brightness(&mut self, brightness: f32) {
        let theme_type = ThemeResolver::brightness_theme(brightness, self.prefs.brightness_threshold);
        log::debug!(
            "Brightness {:.2} against threshold {:.2} picks {}",
            brightness,
            self.prefs.brightness_threshold,
            theme_type
        );
        self.persist_saved_theme(theme_type);
    }

    fn store_threshold(&mut self, threshold: f32) {
        let threshold = if threshold.is_nan() { 0.0 } else { threshold.clamp(0.0, 1.0) };
        self.prefs.brightness_threshold = threshold;
        self.store
            .set_float(keys::AUTOMATIC_BRIGHTNESS_THRESHOLD, threshold);
    }

    fn persist_saved_theme(&mut self, theme_type: ThemeType) {
        // Private mode overrides the saved theme; it must survive to be restored afterwards.
        if theme_type == ThemeType::PrivateMode {
            return;
        }
        if self.prefs.saved_theme() == Some(theme_type) {
            return;
        }
        self.prefs.saved_theme_name = Some(theme_type.as_str().to_string());
        self.store.set_string(keys::THEME_NAME, theme_type.as_str());
    }

    fn migrate_legacy_private_mode(&mut self, window: WindowId) {
        if self.store.contains(keys::PRIVATE_MODE_BY_WINDOW) {
            return;
        }
        let legacy = self.store.bool(keys::LEGACY_PRIVATE_MODE_IS_ON);
        log::info!("Migrating single-window private mode flag ({}) to window {}", legacy, window);

        self.prefs.private_mode_by_window.clear();
        self.prefs.private_mode_by_window.insert(window, legacy);
        self.store
            .set_flags(keys::PRIVATE_MODE_BY_WINDOW, self.prefs.stored_private_flags());
    }

    fn refresh_all(&mut self) {
        let windows: Vec<WindowId> = self.windows.keys().copied().collect();
        for window in windows {
            self.refresh_window(window);
        }
    }

    fn refresh_window(&mut self, window: WindowId) {
        let theme_type = self.resolve(window);
        let Some(resolved) = self.windows.get_mut(&window) else {
            return;
        };
        if resolved.theme.theme_type() == theme_type {
            return;
        }

        log::debug!(
            "Window {} theme {} -> {}",
            window,
            resolved.theme.theme_type(),
            theme_type
        );
        resolved.theme = self.config.theme_for(theme_type);
        self.events.emit(&ThemeEvent::Changed {
            window_id: window,
            theme_type,
        });
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new(MemoryStore::new(), FixedAppearance::default())
    }
}

impl std::fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeManager")
            .field("prefs", &self.prefs)
            .field("windows", &self.windows)
            .field("events", &self.events)
            .field("last_brightness", &self.last_brightness)
            .finish()
    }
}

/// A thread-safe theme manager that can be shared across threads.
pub type SharedThemeManager = Arc<RwLock<ThemeManager>>;

/// Wrap a manager for sharing.
pub fn create_shared_theme_manager(manager: ThemeManager) -> SharedThemeManager {
    Arc::new(RwLock::new(manager))
}
