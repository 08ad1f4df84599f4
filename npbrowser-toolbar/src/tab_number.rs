// SPDX-License-Identifier: LGPL-3.0-only

//! Tab tray button showing the number of open tabs.

use npbrowser_theme::roles::ColorRole;
use npbrowser_theme::theme::Theme;
use npbrowser_theme::util::Color;

use crate::button::ToolbarButton;
use crate::element::ToolbarElement;

/// Label shown before the first count update.
pub const DEFAULT_COUNT_LABEL: &str = "0";
/// Largest count shown as a number.
pub const MAX_TAB_COUNT: usize = 99;
/// Label shown above [MAX_TAB_COUNT].
pub const INFINITY_SYMBOL: &str = "\u{221E}";

/// A [ToolbarButton] with a tab count label.
#[derive(Debug, Clone, PartialEq)]
pub struct TabNumberButton {
    button: ToolbarButton,
    count_label: String,
    label_color: Color,
}

impl TabNumberButton {
    /// Create a button showing [DEFAULT_COUNT_LABEL].
    pub fn new() -> Self {
        Self {
            button: ToolbarButton::new(),
            count_label: DEFAULT_COUNT_LABEL.to_string(),
            label_color: Color::TRANSPARENT,
        }
    }

    /// Show `count` tabs. At least one tab is always shown.
    pub fn update_tab_count(&mut self, count: usize) {
        let count = count.max(1);
        self.count_label = if count <= MAX_TAB_COUNT {
            count.to_string()
        } else {
            INFINITY_SYMBOL.to_string()
        };
    }

    /// The text of the count label.
    pub fn count_label(&self) -> &str {
        &self.count_label
    }

    /// The color of the count label.
    pub fn label_color(&self) -> Color {
        self.label_color
    }

    /// See [ToolbarButton::configure].
    pub fn configure(&mut self, element: &ToolbarElement) {
        self.button.configure(element);
    }

    /// Theme the button and its label.
    pub fn apply_theme(&mut self, theme: &Theme) {
        self.button.apply_theme(theme);
        self.label_color = theme.color(ColorRole::IconPrimary);
    }

    /// Set the pressed state; the label follows the button's tint.
    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.button.set_highlighted(highlighted);
        self.label_color = if highlighted {
            self.button.foreground_color_highlighted()
        } else {
            self.button.foreground_color_normal()
        };
    }

    /// The underlying button.
    pub fn button(&self) -> &ToolbarButton {
        &self.button
    }
}

impl Default for TabNumberButton {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label() {
        let mut button = TabNumberButton::new();
        assert_eq!(button.count_label(), "0");

        button.update_tab_count(0);
        assert_eq!(button.count_label(), "1");
        button.update_tab_count(42);
        assert_eq!(button.count_label(), "42");
        button.update_tab_count(99);
        assert_eq!(button.count_label(), "99");
        button.update_tab_count(100);
        assert_eq!(button.count_label(), "\u{221E}");
    }

    #[test]
    fn test_label_follows_highlight() {
        let theme = Theme::dark();
        let mut button = TabNumberButton::new();
        button.apply_theme(&theme);
        assert_eq!(button.label_color(), theme.color(ColorRole::IconPrimary));

        button.set_highlighted(true);
        assert_eq!(button.label_color(), theme.color(ColorRole::ActionPrimary));
        button.set_highlighted(false);
        assert_eq!(button.label_color(), theme.color(ColorRole::IconPrimary));
    }
}
