// SPDX-License-Identifier: LGPL-3.0-only
#![warn(missing_docs)]

//! Per-window theming and toolbar state for browser shells.

pub use npbrowser_theme as theme;
#[cfg(feature = "toolbar")]
pub use npbrowser_toolbar as toolbar;

/// A "prelude" for users of npbrowser.
///
/// ```rust
/// use npbrowser::prelude::*;
///
/// let mut manager = ThemeManager::default();
/// let window = WindowId::new();
/// manager.register_window(window);
/// manager.set_night_mode(true);
/// assert_eq!(manager.current_theme_type(window), ThemeType::Dark);
/// ```
pub mod prelude {
    pub use crate::theme::appearance::{AppearanceSource, FixedAppearance};
    pub use crate::theme::config::ThemeConfig;
    pub use crate::theme::events::{SubscriptionId, ThemeEvent};
    pub use crate::theme::manager::{SharedThemeManager, ThemeManager};
    pub use crate::theme::roles::ColorRole;
    pub use crate::theme::store::{MemoryStore, PreferenceStore};
    pub use crate::theme::theme::{InterfaceStyle, Theme, ThemeType};
    pub use crate::theme::util::Color;
    pub use crate::theme::window::WindowId;

    #[cfg(feature = "toolbar")]
    pub use crate::toolbar::button::ToolbarButton;
    #[cfg(feature = "toolbar")]
    pub use crate::toolbar::element::{ToolbarActionType, ToolbarElement, ToolbarGesture};
    #[cfg(feature = "toolbar")]
    pub use crate::toolbar::middleware::{ToolbarAction, ToolbarMiddleware, ToolbarMiddlewareAction};
    #[cfg(feature = "toolbar")]
    pub use crate::toolbar::tab_number::TabNumberButton;
}
