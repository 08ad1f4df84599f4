// SPDX-License-Identifier: LGPL-3.0-only

//! Palette API for themed chrome.
//!
//! A [Palette] maps [ColorRole]s to colors. Missing roles fall back to the
//! built-in palette of the same [ThemeType](crate::theme::ThemeType), so a
//! partially overridden palette is always complete.

use std::collections::HashMap;

use crate::roles::ColorRole;
use crate::theme::ThemeType;
use crate::util::{rgb8, Color};

/// Role-based colors for one theme type.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    theme_type: ThemeType,
    colors: HashMap<ColorRole, Color>,
}

impl Palette {
    /// Create an empty palette that falls back to the built-in colors of `theme_type`.
    pub fn new(theme_type: ThemeType) -> Self {
        Self {
            theme_type,
            colors: HashMap::new(),
        }
    }

    /// Set a color role.
    pub fn set_color(&mut self, role: ColorRole, color: Color) {
        self.colors.insert(role, color);
    }

    /// Builder variant of [Palette::set_color].
    pub fn with_color(mut self, role: ColorRole, color: Color) -> Self {
        self.set_color(role, color);
        self
    }

    /// Get a color role, with fallback to the built-in default.
    pub fn color(&self, role: ColorRole) -> Color {
        self.colors
            .get(&role)
            .copied()
            .unwrap_or_else(|| builtin_color(self.theme_type, role))
    }

    /// The theme type this palette belongs to.
    pub fn theme_type(&self) -> ThemeType {
        self.theme_type
    }

    /// Apply overrides on top of this palette.
    pub fn merge(&mut self, overrides: &HashMap<ColorRole, Color>) {
        self.colors
            .extend(overrides.iter().map(|(role, color)| (*role, *color)));
    }
}

fn builtin_color(theme_type: ThemeType, role: ColorRole) -> Color {
    match theme_type {
        ThemeType::Light => match role {
            ColorRole::IconPrimary => rgb8(0x15, 0x14, 0x1a),
            ColorRole::IconDisabled => Color::from_rgba8(0x15, 0x14, 0x1a, 0x66),
            ColorRole::ActionPrimary => rgb8(0x00, 0x62, 0xfa),
            ColorRole::Layer1 => rgb8(0xf9, 0xf9, 0xfb),
            ColorRole::TextPrimary => rgb8(0x15, 0x14, 0x1a),
            ColorRole::BorderPrimary => rgb8(0x8f, 0x8f, 0x9d),
        },
        ThemeType::Dark => match role {
            ColorRole::IconPrimary => rgb8(0xfb, 0xfb, 0xfe),
            ColorRole::IconDisabled => Color::from_rgba8(0xfb, 0xfb, 0xfe, 0x66),
            ColorRole::ActionPrimary => rgb8(0x00, 0xdd, 0xff),
            ColorRole::Layer1 => rgb8(0x1c, 0x1b, 0x22),
            ColorRole::TextPrimary => rgb8(0xfb, 0xfb, 0xfe),
            ColorRole::BorderPrimary => rgb8(0x52, 0x52, 0x5e),
        },
        ThemeType::PrivateMode => match role {
            ColorRole::IconPrimary => rgb8(0xfb, 0xfb, 0xfe),
            ColorRole::IconDisabled => Color::from_rgba8(0xfb, 0xfb, 0xfe, 0x66),
            ColorRole::ActionPrimary => rgb8(0xc6, 0x89, 0xff),
            ColorRole::Layer1 => rgb8(0x29, 0x1d, 0x4f),
            ColorRole::TextPrimary => rgb8(0xfb, 0xfb, 0xfe),
            ColorRole::BorderPrimary => rgb8(0x59, 0x2a, 0xcb),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_roles_fall_back_to_builtin() {
        let palette = Palette::new(ThemeType::Dark);
        assert_eq!(palette.color(ColorRole::Layer1), rgb8(0x1c, 0x1b, 0x22));
    }

    #[test]
    fn test_merge_overrides_only_given_roles() {
        let mut palette = Palette::new(ThemeType::Light);
        let mut overrides = HashMap::new();
        overrides.insert(ColorRole::ActionPrimary, rgb8(1, 2, 3));
        palette.merge(&overrides);

        assert_eq!(palette.color(ColorRole::ActionPrimary), rgb8(1, 2, 3));
        assert_eq!(palette.color(ColorRole::IconPrimary), rgb8(0x15, 0x14, 0x1a));
    }

    #[test]
    fn test_private_palette_differs_from_dark() {
        let dark = Palette::new(ThemeType::Dark);
        let private = Palette::new(ThemeType::PrivateMode);
        assert_ne!(
            dark.color(ColorRole::Layer1),
            private.color(ColorRole::Layer1)
        );
    }
}
