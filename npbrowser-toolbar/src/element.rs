// SPDX-License-Identifier: LGPL-3.0-only

//! Toolbar element descriptions.

/// What a toolbar button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarActionType {
    /// Navigate back.
    Back,
    /// Navigate forward.
    Forward,
    /// Open the homepage.
    Home,
    /// Show the tab tray.
    Tabs,
    /// Open the app menu.
    Menu,
}

/// How a toolbar button was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarGesture {
    /// Single tap.
    Tap,
    /// Long press.
    LongPress,
}

/// The state a toolbar button is configured from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarElement {
    /// The action the button triggers.
    pub action_type: ToolbarActionType,
    /// Icon asset name.
    pub icon_name: String,
    /// Whether the button can be used.
    pub is_enabled: bool,
    /// Draw the button in its highlighted color even when not pressed.
    pub should_display_as_highlighted: bool,
    /// Whether a long press does something.
    pub supports_long_press: bool,
    /// Accessibility label.
    pub a11y_label: String,
    /// Accessibility identifier.
    pub a11y_id: String,
}

impl ToolbarElement {
    /// Create an enabled element with no highlight and no long press.
    pub fn new(
        action_type: ToolbarActionType,
        icon_name: impl Into<String>,
        a11y_label: impl Into<String>,
        a11y_id: impl Into<String>,
    ) -> Self {
        Self {
            action_type,
            icon_name: icon_name.into(),
            is_enabled: true,
            should_display_as_highlighted: false,
            supports_long_press: false,
            a11y_label: a11y_label.into(),
            a11y_id: a11y_id.into(),
        }
    }

    /// Set whether the element is enabled.
    pub fn enabled(mut self, is_enabled: bool) -> Self {
        self.is_enabled = is_enabled;
        self
    }

    /// Set whether the element is drawn highlighted.
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.should_display_as_highlighted = highlighted;
        self
    }

    /// Set whether the element reacts to long presses.
    pub fn with_long_press(mut self, supported: bool) -> Self {
        self.supports_long_press = supported;
        self
    }
}
