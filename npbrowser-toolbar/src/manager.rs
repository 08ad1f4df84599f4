// SPDX-License-Identifier: LGPL-3.0-only

//! Toolbar layout decisions.

/// Where the address toolbar sits in a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolbarPosition {
    /// Above the web content.
    #[default]
    Top,
    /// Below the web content.
    Bottom,
}

/// Layout decisions shared by all toolbars.
pub trait ToolbarManager {
    /// Whether the navigation toolbar draws its top border for an address
    /// toolbar at `position`.
    fn should_display_navigation_border(&self, position: ToolbarPosition) -> bool;
}

/// The stock [ToolbarManager].
///
/// With the address bar at the top the navigation toolbar is a separate bar at
/// the bottom and gets a border; at the bottom both bars merge and it does not.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultToolbarManager;

impl ToolbarManager for DefaultToolbarManager {
    fn should_display_navigation_border(&self, position: ToolbarPosition) -> bool {
        position == ToolbarPosition::Top
    }
}
