// SPDX-License-Identifier: LGPL-3.0-only

//! Theme types and the resolved [Theme] value handed to chrome code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;
use crate::palette::Palette;
use crate::roles::ColorRole;
use crate::util::Color;

/// The kind of theme a window is showing.
///
/// The string forms (`"normal"`, `"dark"`, `"private"`) are the values stored
/// under the saved theme key and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeType {
    /// Light appearance.
    #[serde(rename = "normal")]
    Light,
    /// Dark appearance.
    #[serde(rename = "dark")]
    Dark,
    /// Private browsing appearance. Never stored as the saved theme.
    #[serde(rename = "private")]
    PrivateMode,
}

impl ThemeType {
    /// The stored string form of this theme type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeType::Light => "normal",
            ThemeType::Dark => "dark",
            ThemeType::PrivateMode => "private",
        }
    }

    /// The interface style a window should be forced into.
    pub fn interface_style(&self) -> InterfaceStyle {
        match self {
            ThemeType::Light => InterfaceStyle::Light,
            ThemeType::Dark | ThemeType::PrivateMode => InterfaceStyle::Dark,
        }
    }
}

impl Default for ThemeType {
    fn default() -> Self {
        Self::Light
    }
}

impl fmt::Display for ThemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeType {
    type Err = ThemeError;

    /// Parses the stored form, plus `light` as an alias for `normal`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" | "light" => Ok(ThemeType::Light),
            "dark" => Ok(ThemeType::Dark),
            "private" => Ok(ThemeType::PrivateMode),
            _ => Err(ThemeError::not_found(s)),
        }
    }
}

/// Light/dark appearance as reported by (or forced onto) the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InterfaceStyle {
    /// Light appearance.
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

impl From<InterfaceStyle> for ThemeType {
    fn from(style: InterfaceStyle) -> Self {
        match style {
            InterfaceStyle::Light => ThemeType::Light,
            InterfaceStyle::Dark => ThemeType::Dark,
        }
    }
}

/// A resolved theme: its type plus the palette chrome should draw with.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    palette: Palette,
}

impl Theme {
    /// Create the built-in theme for `theme_type`.
    pub fn new(theme_type: ThemeType) -> Self {
        Self {
            palette: Palette::new(theme_type),
        }
    }

    /// Create a theme from a (possibly overridden) palette.
    pub fn with_palette(palette: Palette) -> Self {
        Self { palette }
    }

    /// Built-in light theme.
    pub fn light() -> Self {
        Self::new(ThemeType::Light)
    }

    /// Built-in dark theme.
    pub fn dark() -> Self {
        Self::new(ThemeType::Dark)
    }

    /// Built-in private mode theme.
    pub fn private_mode() -> Self {
        Self::new(ThemeType::PrivateMode)
    }

    /// The theme type.
    pub fn theme_type(&self) -> ThemeType {
        self.palette.theme_type()
    }

    /// Shortcut for `self.palette().color(role)`.
    pub fn color(&self, role: ColorRole) -> Color {
        self.palette.color(role)
    }

    /// The palette of this theme.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
