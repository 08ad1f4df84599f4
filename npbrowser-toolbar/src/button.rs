// SPDX-License-Identifier: LGPL-3.0-only

//! Themed toolbar button state.

use npbrowser_theme::roles::ColorRole;
use npbrowser_theme::theme::Theme;
use npbrowser_theme::util::Color;

use crate::element::{ToolbarActionType, ToolbarElement, ToolbarGesture};

/// Interaction state of a button, as far as coloring is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Idle.
    Normal,
    /// Currently pressed.
    Highlighted,
    /// Not usable.
    Disabled,
}

/// The presentation state of one toolbar button.
///
/// Colors stay transparent until a theme is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarButton {
    element: Option<ToolbarElement>,
    is_enabled: bool,
    is_highlighted: bool,
    should_display_as_highlighted: bool,
    foreground_color_normal: Color,
    foreground_color_highlighted: Color,
    foreground_color_disabled: Color,
    background_color_normal: Color,
}

impl ToolbarButton {
    /// Create an unconfigured button.
    pub fn new() -> Self {
        Self {
            element: None,
            is_enabled: true,
            is_highlighted: false,
            should_display_as_highlighted: false,
            foreground_color_normal: Color::TRANSPARENT,
            foreground_color_highlighted: Color::TRANSPARENT,
            foreground_color_disabled: Color::TRANSPARENT,
            background_color_normal: Color::TRANSPARENT,
        }
    }

    /// Configure the button from `element`, replacing any previous configuration.
    pub fn configure(&mut self, element: &ToolbarElement) {
        self.is_enabled = element.is_enabled;
        self.should_display_as_highlighted = element.should_display_as_highlighted;
        self.element = Some(element.clone());
    }

    /// Take the button colors from `theme`.
    pub fn apply_theme(&mut self, theme: &Theme) {
        self.foreground_color_normal = theme.color(ColorRole::IconPrimary);
        self.foreground_color_highlighted = theme.color(ColorRole::ActionPrimary);
        self.foreground_color_disabled = theme.color(ColorRole::IconDisabled);
        self.background_color_normal = Color::TRANSPARENT;
    }

    /// Set the pressed state.
    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.is_highlighted = highlighted;
    }

    /// The current interaction state.
    pub fn state(&self) -> ButtonState {
        if self.is_highlighted {
            ButtonState::Highlighted
        } else if !self.is_enabled {
            ButtonState::Disabled
        } else {
            ButtonState::Normal
        }
    }

    /// The icon tint for the current state.
    pub fn foreground_color(&self) -> Color {
        match self.state() {
            ButtonState::Highlighted => self.foreground_color_highlighted,
            ButtonState::Disabled => self.foreground_color_disabled,
            ButtonState::Normal if self.should_display_as_highlighted => {
                self.foreground_color_highlighted
            },
            ButtonState::Normal => self.foreground_color_normal,
        }
    }

    /// The background color.
    pub fn background_color(&self) -> Color {
        self.background_color_normal
    }

    /// Icon tint used when idle.
    pub fn foreground_color_normal(&self) -> Color {
        self.foreground_color_normal
    }

    /// Icon tint used when pressed.
    pub fn foreground_color_highlighted(&self) -> Color {
        self.foreground_color_highlighted
    }

    /// The configured element, if any.
    pub fn element(&self) -> Option<&ToolbarElement> {
        self.element.as_ref()
    }

    /// Whether the button is enabled.
    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    /// Whether the button is pressed.
    pub fn is_highlighted(&self) -> bool {
        self.is_highlighted
    }

    /// Turn a recognized gesture into the action it triggers.
    ///
    /// Disabled or unconfigured buttons ignore gestures; long presses only
    /// count when the element supports them.
    pub fn handle_gesture(&self, gesture: ToolbarGesture) -> Option<(ToolbarActionType, ToolbarGesture)> {
        let element = self.element.as_ref()?;
        if !self.is_enabled {
            log::debug!("Ignoring {:?} on disabled {:?} button", gesture, element.action_type);
            return None;
        }
        match gesture {
            ToolbarGesture::Tap => Some((element.action_type, gesture)),
            ToolbarGesture::LongPress if element.supports_long_press => {
                Some((element.action_type, gesture))
            },
            ToolbarGesture::LongPress => None,
        }
    }
}

impl Default for ToolbarButton {
    fn default() -> Self {
        Self::new()
    }
}
